//! Field flag decoding for interactive form widgets.
//!
//! Field flags (`/Ff`) per ISO 32000-1:2008 Section 12.7.3 are a 32-bit
//! integer whose bit positions are numbered from 1. This module exposes the
//! positional primitive [`is_bit_set`], the named positions, a
//! [`DecodedFlags`] view with one predicate per flag, and typed `bitflags`
//! views per field type.
//!
//! Only read-only, multiline, radio, push button, combo and multi-select
//! change what gets rendered; the other positions are decoded so callers can
//! inspect them.

use bitflags::bitflags;

/// 1-based bit positions of the field flags.
pub mod positions {
    /// Bit 1: Field is read-only
    pub const READ_ONLY: u32 = 1;
    /// Bit 2: Field is required
    pub const REQUIRED: u32 = 2;
    /// Bit 3: Field should not be exported
    pub const NO_EXPORT: u32 = 3;
    /// Bit 13: (Tx) Text may span multiple lines
    pub const MULTILINE: u32 = 13;
    /// Bit 14: (Tx) Text is a password
    pub const PASSWORD: u32 = 14;
    /// Bit 15: (Btn) Exactly one radio button must be on
    pub const NO_TOGGLE_TO_OFF: u32 = 15;
    /// Bit 16: (Btn) Radio button
    pub const RADIO: u32 = 16;
    /// Bit 17: (Btn) Push button
    pub const PUSHBUTTON: u32 = 17;
    /// Bit 18: (Ch) Combo box rather than list box
    pub const COMBO: u32 = 18;
    /// Bit 19: (Ch) Combo box has an editable text box
    pub const EDIT: u32 = 19;
    /// Bit 20: (Ch) Options are sorted
    pub const SORT: u32 = 20;
    /// Bit 21: (Tx) Value is a file path
    pub const FILE_SELECT: u32 = 21;
    /// Bit 22: (Ch) Several options may be selected
    pub const MULTI_SELECT: u32 = 22;
    /// Bit 23: (Tx, Ch) No spell checking
    pub const DO_NOT_SPELL_CHECK: u32 = 23;
    /// Bit 24: (Tx) No scrolling
    pub const DO_NOT_SCROLL: u32 = 24;
    /// Bit 25: (Tx) Comb field
    pub const COMB: u32 = 25;
    /// Bit 26: (Tx) Rich text value
    pub const RICH_TEXT: u32 = 26;
    /// Bit 26: (Btn) Radio buttons with equal values toggle in unison
    pub const RADIOS_IN_UNISON: u32 = 26;
    /// Bit 27: (Ch) Commit on selection change
    pub const COMMIT_ON_SEL_CHANGE: u32 = 27;
}

/// Check a 1-based bit position of a flag word.
///
/// Positions outside `1..=32` are never set.
///
/// # Examples
///
/// ```
/// use pdf_annotation_layer::field_flags::is_bit_set;
///
/// assert!(is_bit_set(1 << 12, 13));
/// assert!(!is_bit_set(1 << 12, 12));
/// assert!(!is_bit_set(u32::MAX, 0));
/// ```
#[inline]
pub fn is_bit_set(flags: u32, position: u32) -> bool {
    match position.checked_sub(1) {
        Some(shift) if shift < u32::BITS => (flags >> shift) & 1 == 1,
        _ => false,
    }
}

/// Read-only view over a record's field flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodedFlags(u32);

impl DecodedFlags {
    /// Wrap a raw flag word.
    pub fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Get raw value.
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Check an arbitrary 1-based position.
    pub fn is_set(&self, position: u32) -> bool {
        is_bit_set(self.0, position)
    }

    /// Field is read-only.
    pub fn is_read_only(&self) -> bool {
        self.is_set(positions::READ_ONLY)
    }

    /// Field is required.
    pub fn is_required(&self) -> bool {
        self.is_set(positions::REQUIRED)
    }

    /// Field is not exported.
    pub fn is_no_export(&self) -> bool {
        self.is_set(positions::NO_EXPORT)
    }

    /// Text field spans multiple lines.
    pub fn is_multiline(&self) -> bool {
        self.is_set(positions::MULTILINE)
    }

    /// Text field is a password.
    pub fn is_password(&self) -> bool {
        self.is_set(positions::PASSWORD)
    }

    /// Radio group may not be toggled off.
    pub fn is_no_toggle_to_off(&self) -> bool {
        self.is_set(positions::NO_TOGGLE_TO_OFF)
    }

    /// Button is a radio button.
    pub fn is_radio(&self) -> bool {
        self.is_set(positions::RADIO)
    }

    /// Button is a push button.
    pub fn is_pushbutton(&self) -> bool {
        self.is_set(positions::PUSHBUTTON)
    }

    /// Choice field is a combo box.
    pub fn is_combo(&self) -> bool {
        self.is_set(positions::COMBO)
    }

    /// Combo box is editable.
    pub fn is_edit(&self) -> bool {
        self.is_set(positions::EDIT)
    }

    /// Choice options are sorted.
    pub fn is_sort(&self) -> bool {
        self.is_set(positions::SORT)
    }

    /// Text field selects a file.
    pub fn is_file_select(&self) -> bool {
        self.is_set(positions::FILE_SELECT)
    }

    /// Choice field allows several selections.
    pub fn is_multi_select(&self) -> bool {
        self.is_set(positions::MULTI_SELECT)
    }

    /// Spell checking is disabled.
    pub fn is_do_not_spell_check(&self) -> bool {
        self.is_set(positions::DO_NOT_SPELL_CHECK)
    }

    /// Scrolling is disabled.
    pub fn is_do_not_scroll(&self) -> bool {
        self.is_set(positions::DO_NOT_SCROLL)
    }

    /// Text field is a comb field.
    pub fn is_comb(&self) -> bool {
        self.is_set(positions::COMB)
    }

    /// Text field holds rich text.
    pub fn is_rich_text(&self) -> bool {
        self.is_set(positions::RICH_TEXT)
    }

    /// Radio buttons toggle in unison.
    pub fn is_radios_in_unison(&self) -> bool {
        self.is_set(positions::RADIOS_IN_UNISON)
    }

    /// Choice value commits on selection change.
    pub fn is_commit_on_sel_change(&self) -> bool {
        self.is_set(positions::COMMIT_ON_SEL_CHANGE)
    }

    /// Typed view for text fields.
    pub fn text(&self) -> TextFieldFlags {
        TextFieldFlags::from_bits_truncate(self.0)
    }

    /// Typed view for button fields.
    pub fn button(&self) -> ButtonFieldFlags {
        ButtonFieldFlags::from_bits_truncate(self.0)
    }

    /// Typed view for choice fields.
    pub fn choice(&self) -> ChoiceFieldFlags {
        ChoiceFieldFlags::from_bits_truncate(self.0)
    }
}

impl From<u32> for DecodedFlags {
    fn from(bits: u32) -> Self {
        Self::new(bits)
    }
}

bitflags! {
    /// Text field flags (field type Tx).
    ///
    /// Per PDF spec Table 228 (Field flags specific to text fields).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TextFieldFlags: u32 {
        /// Bit 1: Field is read-only
        const READ_ONLY = 1 << 0;
        /// Bit 2: Field is required
        const REQUIRED = 1 << 1;
        /// Bit 3: Field should not be exported
        const NO_EXPORT = 1 << 2;
        /// Bit 13: Text may include multiple lines
        const MULTILINE = 1 << 12;
        /// Bit 14: Text should be displayed as asterisks (password)
        const PASSWORD = 1 << 13;
        /// Bit 21: File path should be submitted as field value
        const FILE_SELECT = 1 << 20;
        /// Bit 23: Text should not be spell-checked
        const DO_NOT_SPELL_CHECK = 1 << 22;
        /// Bit 24: Text should not scroll beyond visible area
        const DO_NOT_SCROLL = 1 << 23;
        /// Bit 25: Field is divided into equally spaced positions (comb)
        const COMB = 1 << 24;
        /// Bit 26: Field contains rich text
        const RICH_TEXT = 1 << 25;
    }
}

bitflags! {
    /// Button field flags (field type Btn).
    ///
    /// Per PDF spec Table 226 (Field flags specific to button fields).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ButtonFieldFlags: u32 {
        /// Bit 1: Field is read-only
        const READ_ONLY = 1 << 0;
        /// Bit 2: Field is required
        const REQUIRED = 1 << 1;
        /// Bit 3: Field should not be exported
        const NO_EXPORT = 1 << 2;
        /// Bit 15: No toggle to off; at least one in group must be on
        const NO_TOGGLE_TO_OFF = 1 << 14;
        /// Bit 16: Radio button (if not set and not PUSHBUTTON, a checkbox)
        const RADIO = 1 << 15;
        /// Bit 17: Push button
        const PUSHBUTTON = 1 << 16;
        /// Bit 26: Radio buttons in unison
        const RADIOS_IN_UNISON = 1 << 25;
    }
}

bitflags! {
    /// Choice field flags (field type Ch).
    ///
    /// Per PDF spec Table 230 (Field flags specific to choice fields).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChoiceFieldFlags: u32 {
        /// Bit 1: Field is read-only
        const READ_ONLY = 1 << 0;
        /// Bit 2: Field is required
        const REQUIRED = 1 << 1;
        /// Bit 3: Field should not be exported
        const NO_EXPORT = 1 << 2;
        /// Bit 18: Combo box (dropdown); if not set, a list box
        const COMBO = 1 << 17;
        /// Bit 19: (combo only) User may enter custom text
        const EDIT = 1 << 18;
        /// Bit 20: Options should be sorted alphabetically
        const SORT = 1 << 19;
        /// Bit 22: Allow multiple selections
        const MULTI_SELECT = 1 << 21;
        /// Bit 23: Text should not be spell-checked
        const DO_NOT_SPELL_CHECK = 1 << 22;
        /// Bit 27: Value is committed when selection changes
        const COMMIT_ON_SEL_CHANGE = 1 << 26;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_is_bit_set_one_based() {
        assert!(is_bit_set(1, 1));
        assert!(!is_bit_set(1, 2));
        assert!(is_bit_set(1 << 31, 32));
    }

    #[test]
    fn test_is_bit_set_out_of_range() {
        assert!(!is_bit_set(u32::MAX, 0));
        assert!(!is_bit_set(u32::MAX, 33));
        assert!(!is_bit_set(u32::MAX, u32::MAX));
    }

    #[test]
    fn test_decoded_predicates() {
        let flags = DecodedFlags::new((1 << 0) | (1 << 12) | (1 << 21));
        assert!(flags.is_read_only());
        assert!(flags.is_multiline());
        assert!(flags.is_multi_select());
        assert!(!flags.is_combo());
        assert!(!flags.is_pushbutton());
        assert!(!flags.is_radio());
    }

    #[test]
    fn test_shared_bit_26() {
        let flags = DecodedFlags::new(1 << 25);
        assert!(flags.is_rich_text());
        assert!(flags.is_radios_in_unison());
        assert!(flags.text().contains(TextFieldFlags::RICH_TEXT));
        assert!(flags.button().contains(ButtonFieldFlags::RADIOS_IN_UNISON));
    }

    #[test]
    fn test_typed_views_match_positions() {
        assert_eq!(TextFieldFlags::MULTILINE.bits(), 1 << (positions::MULTILINE - 1));
        assert_eq!(ButtonFieldFlags::RADIO.bits(), 1 << (positions::RADIO - 1));
        assert_eq!(ButtonFieldFlags::PUSHBUTTON.bits(), 1 << (positions::PUSHBUTTON - 1));
        assert_eq!(ChoiceFieldFlags::COMBO.bits(), 1 << (positions::COMBO - 1));
        assert_eq!(ChoiceFieldFlags::MULTI_SELECT.bits(), 1 << (positions::MULTI_SELECT - 1));
    }

    #[test]
    fn test_typed_view_truncates_foreign_bits() {
        let flags = DecodedFlags::new((1 << 12) | (1 << 17));
        assert_eq!(flags.text(), TextFieldFlags::MULTILINE);
        assert_eq!(flags.choice(), ChoiceFieldFlags::COMBO);
        assert!(flags.button().is_empty());
    }

    proptest! {
        #[test]
        fn prop_is_bit_set_matches_shift(flags in any::<u32>(), position in 1u32..=32) {
            prop_assert_eq!(is_bit_set(flags, position), (flags >> (position - 1)) & 1 == 1);
        }
    }
}
