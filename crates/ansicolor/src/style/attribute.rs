use crate::error::{AttributeError, OutOfBoundsError};

/// A text attribute other than regular.
///
/// This enumeration models attributes that differ from the default appearance.
/// Discriminants are powers of two and hence can be combined into a
/// [`Styles`] bit vector. Unlike with colors, each attribute has its own SGR
/// parameter for enabling it, but several attributes share the SGR parameter
/// for disabling them again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold = 0x1,
    Faint = 0x2,
    Italic = 0x4,
    Underline = 0x8,
    Blink = 0x10,
    FastBlink = 0x20,
    Reverse = 0x40,
    Conceal = 0x80,
    Strike = 0x100,
    DoubleUnderline = 0x200,
}

impl Attribute {
    /// All attributes in bit order.
    pub const ALL: [Attribute; 10] = [
        Attribute::Bold,
        Attribute::Faint,
        Attribute::Italic,
        Attribute::Underline,
        Attribute::Blink,
        Attribute::FastBlink,
        Attribute::Reverse,
        Attribute::Conceal,
        Attribute::Strike,
        Attribute::DoubleUnderline,
    ];

    #[inline]
    const fn bits(&self) -> u16 {
        *self as u16
    }

    const fn successor(&self) -> Option<Self> {
        use self::Attribute::*;

        Some(match self {
            Bold => Faint,
            Faint => Italic,
            Italic => Underline,
            Underline => Blink,
            Blink => FastBlink,
            FastBlink => Reverse,
            Reverse => Conceal,
            Conceal => Strike,
            Strike => DoubleUnderline,
            DoubleUnderline => return None,
        })
    }

    /// Get the SGR parameter for enabling this attribute.
    pub const fn enable_sgr(&self) -> u8 {
        use self::Attribute::*;

        match self {
            Bold => 1,
            Faint => 2,
            Italic => 3,
            Underline => 4,
            Blink => 5,
            FastBlink => 6,
            Reverse => 7,
            Conceal => 8,
            Strike => 9,
            DoubleUnderline => 21,
        }
    }

    /// Get the clearer for disabling this attribute.
    pub const fn clearer(&self) -> Clearer {
        use self::Attribute::*;

        match self {
            Bold | Faint => Clearer::RemoveIntensity,
            Italic => Clearer::RemoveItalic,
            Underline | DoubleUnderline => Clearer::RemoveUnderline,
            Blink | FastBlink => Clearer::RemoveBlink,
            Reverse => Clearer::RemoveReverse,
            Conceal => Clearer::RemoveConceal,
            Strike => Clearer::RemoveStrike,
        }
    }

    /// Get the SGR parameter for disabling this attribute.
    pub const fn disable_sgr(&self) -> u8 {
        self.clearer().sgr()
    }

    /// Get this attribute's name.
    pub const fn name(&self) -> &'static str {
        use self::Attribute::*;

        match self {
            Bold => "bold",
            Faint => "faint",
            Italic => "italic",
            Underline => "underline",
            Blink => "blink",
            FastBlink => "fast blink",
            Reverse => "reverse",
            Conceal => "conceal",
            Strike => "strike",
            DoubleUnderline => "double underline",
        }
    }

    /// Look up an attribute by name.
    pub fn from_name(name: &str) -> Result<Self, AttributeError> {
        if name.is_empty() {
            return Err(AttributeError::Empty);
        }

        Self::ALL
            .into_iter()
            .find(|attr| attr.name() == name)
            .ok_or(AttributeError::NotFound)
    }
}

impl TryFrom<u8> for Attribute {
    type Error = OutOfBoundsError;

    /// Decode an attribute from its enabling SGR parameter.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|attr| attr.enable_sgr() == value)
            .ok_or_else(|| OutOfBoundsError::new(value, 1..=21))
    }
}

impl std::str::FromStr for Attribute {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::from_name(s)
    }
}

// ----------------------------------------------------------------------------------------------------------

/// An SGR parameter that disables one or more text attributes.
///
/// Bold and faint share [`Clearer::RemoveIntensity`], underline and double
/// underline share [`Clearer::RemoveUnderline`], and the two blinking speeds
/// share [`Clearer::RemoveBlink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Clearer {
    RemoveIntensity = 22,
    RemoveItalic = 23,
    RemoveUnderline = 24,
    RemoveBlink = 25,
    RemoveReverse = 27,
    RemoveConceal = 28,
    RemoveStrike = 29,
}

impl Clearer {
    /// All clearers in SGR parameter order.
    pub const ALL: [Clearer; 7] = [
        Clearer::RemoveIntensity,
        Clearer::RemoveItalic,
        Clearer::RemoveUnderline,
        Clearer::RemoveBlink,
        Clearer::RemoveReverse,
        Clearer::RemoveConceal,
        Clearer::RemoveStrike,
    ];

    /// Get the SGR parameter.
    pub const fn sgr(&self) -> u8 {
        *self as u8
    }

    /// Get the attributes disabled by this clearer.
    pub const fn styles(&self) -> Styles {
        use self::Attribute::*;

        let bits = match self {
            Self::RemoveIntensity => Bold.bits() | Faint.bits(),
            Self::RemoveItalic => Italic.bits(),
            Self::RemoveUnderline => Underline.bits() | DoubleUnderline.bits(),
            Self::RemoveBlink => Blink.bits() | FastBlink.bits(),
            Self::RemoveReverse => Reverse.bits(),
            Self::RemoveConceal => Conceal.bits(),
            Self::RemoveStrike => Strike.bits(),
        };
        Styles(bits)
    }

    /// Get this clearer's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RemoveIntensity => "remove intensity",
            Self::RemoveItalic => "remove italic",
            Self::RemoveUnderline => "remove underline",
            Self::RemoveBlink => "remove blink",
            Self::RemoveReverse => "remove reverse",
            Self::RemoveConceal => "remove conceal",
            Self::RemoveStrike => "remove strike",
        }
    }

    /// Look up a clearer by name.
    pub fn from_name(name: &str) -> Result<Self, AttributeError> {
        if name.is_empty() {
            return Err(AttributeError::Empty);
        }

        Self::ALL
            .into_iter()
            .find(|clearer| clearer.name() == name)
            .ok_or(AttributeError::NotFound)
    }
}

impl TryFrom<u8> for Clearer {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|clearer| clearer.sgr() == value)
            .ok_or_else(|| OutOfBoundsError::new(value, 22..=29))
    }
}

impl std::str::FromStr for Clearer {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Clearer::from_name(s)
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A set of text attributes.
///
/// This struct is a bit vector with one bit per [`Attribute`]. The empty set
/// is the terminal's default appearance and perfectly valid. The set only
/// changes through [`Styles::set`], [`Styles::clear`], and
/// [`Styles::toggle`], all of which accept a single attribute or another
/// set.
///
/// ```
/// # use ansicolor::style::{Attribute, Styles};
/// let mut styles = Styles::default();
/// styles.set(Attribute::Bold | Attribute::Underline);
/// assert!(styles.has(Attribute::Bold));
/// assert!(!styles.has(Attribute::Bold | Attribute::Italic));
/// assert!(styles.has_any(Attribute::Bold | Attribute::Italic));
///
/// assert_eq!(styles.render(), "1;4");
/// assert_eq!(styles.render_clear(), "22;24");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Styles(u16);

impl Styles {
    const MASK: u16 = 0x3ff;

    /// The empty set.
    pub const EMPTY: Styles = Styles(0);

    /// Create a new set from raw bits, ignoring bits without attribute.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & Self::MASK)
    }

    /// Get the raw bits.
    #[inline]
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Determine whether this set is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Get the number of attributes in this set.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Get an iterator over the attributes in bit order.
    #[inline]
    pub const fn attributes(&self) -> AttributeIter {
        AttributeIter {
            styles: *self,
            cursor: None,
            remaining: self.len(),
        }
    }

    /// Add the given attributes.
    pub fn set<S: Into<Styles>>(&mut self, flags: S) {
        self.0 |= flags.into().0;
    }

    /// Remove the given attributes.
    pub fn clear<S: Into<Styles>>(&mut self, flags: S) {
        self.0 &= !flags.into().0;
    }

    /// Flip the given attributes.
    pub fn toggle<S: Into<Styles>>(&mut self, flags: S) {
        self.0 ^= flags.into().0;
    }

    /// Determine whether this set contains all of the given attributes.
    pub fn has<S: Into<Styles>>(&self, flags: S) -> bool {
        let bits = flags.into().0;
        self.0 & bits == bits
    }

    /// Determine whether this set contains any of the given attributes.
    pub fn has_any<S: Into<Styles>>(&self, flags: S) -> bool {
        self.0 & flags.into().0 != 0
    }

    /// Render the SGR parameters enabling this set's attributes.
    ///
    /// Parameters appear in bit order, separated by semicolons. The empty set
    /// renders as the empty string.
    pub fn render(&self) -> String {
        let mut s = String::new();
        // Writing to a string cannot fail.
        let _ = self.write_setters(&mut s);
        s
    }

    /// Render the SGR parameters disabling this set's attributes.
    ///
    /// Since several attributes share a clearer, each clearer appears at most
    /// once, in parameter order.
    pub fn render_clear(&self) -> String {
        let mut s = String::new();
        // Writing to a string cannot fail.
        let _ = self.write_clearers(&mut s);
        s
    }

    pub(crate) fn write_setters<W: std::fmt::Write>(&self, out: &mut W) -> std::fmt::Result {
        for (index, attr) in self.attributes().enumerate() {
            if 0 < index {
                out.write_char(';')?;
            }
            write!(out, "{}", attr.enable_sgr())?;
        }
        Ok(())
    }

    pub(crate) fn write_clearers<W: std::fmt::Write>(&self, out: &mut W) -> std::fmt::Result {
        let clearers = Clearer::ALL
            .into_iter()
            .filter(|clearer| self.has_any(clearer.styles()));
        for (index, clearer) in clearers.enumerate() {
            if 0 < index {
                out.write_char(';')?;
            }
            write!(out, "{}", clearer.sgr())?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Styles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.attributes()).finish()
    }
}

impl From<Attribute> for Styles {
    fn from(value: Attribute) -> Self {
        Self(value.bits())
    }
}

impl std::iter::FromIterator<Attribute> for Styles {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut styles = Styles::EMPTY;
        for attr in iter {
            styles.set(attr);
        }
        styles
    }
}

// ----------------------------------------------------------------------------------------------------------

/// An iterator over text attributes.
#[derive(Debug)]
pub struct AttributeIter {
    styles: Styles,
    cursor: Option<Attribute>,
    remaining: usize,
}

impl std::iter::Iterator for AttributeIter {
    type Item = Attribute;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let attr = match self.cursor {
                None => Attribute::Bold,
                Some(attr) => attr.successor()?,
            };
            self.cursor = Some(attr);

            if self.styles.bits() & attr.bits() != 0 {
                self.remaining -= 1;
                return Some(attr);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for AttributeIter {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl std::iter::FusedIterator for AttributeIter {}

// ----------------------------------------------------------------------------------------------------------
// BitOr

impl std::ops::BitOr for Attribute {
    type Output = Styles;

    fn bitor(self, other: Self) -> Self::Output {
        Styles(self.bits() | other.bits())
    }
}

impl std::ops::BitOr<Styles> for Attribute {
    type Output = Styles;

    fn bitor(self, other: Styles) -> Self::Output {
        Styles(self.bits() | other.bits())
    }
}

impl std::ops::BitOr<Attribute> for Styles {
    type Output = Styles;

    fn bitor(self, other: Attribute) -> Self::Output {
        Styles(self.bits() | other.bits())
    }
}

impl std::ops::BitOr for Styles {
    type Output = Styles;

    fn bitor(self, other: Self) -> Self::Output {
        Styles(self.bits() | other.bits())
    }
}

impl<S: Into<Styles>> std::ops::BitOrAssign<S> for Styles {
    fn bitor_assign(&mut self, other: S) {
        self.set(other);
    }
}

// ----------------------------------------------------------------------------------------------------------
// Sub

impl std::ops::Sub<Attribute> for Styles {
    type Output = Styles;

    fn sub(self, other: Attribute) -> Self::Output {
        Styles(self.bits() & !other.bits())
    }
}

impl std::ops::Sub for Styles {
    type Output = Styles;

    fn sub(self, other: Self) -> Self::Output {
        Styles(self.bits() & !other.bits())
    }
}

impl<S: Into<Styles>> std::ops::SubAssign<S> for Styles {
    fn sub_assign(&mut self, other: S) {
        self.clear(other);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_attribute_codes() {
        use super::Attribute::*;

        let setters: Vec<u8> = Attribute::ALL.iter().map(Attribute::enable_sgr).collect();
        assert_eq!(setters, [1, 2, 3, 4, 5, 6, 7, 8, 9, 21]);

        let clearers: Vec<u8> = Attribute::ALL.iter().map(Attribute::disable_sgr).collect();
        assert_eq!(clearers, [22, 22, 23, 24, 25, 25, 27, 28, 29, 24]);

        for attr in Attribute::ALL {
            assert_eq!(Attribute::try_from(attr.enable_sgr()), Ok(attr));
            assert_eq!(attr.name().parse::<Attribute>(), Ok(attr));
            assert!(attr.clearer().styles().has(attr));
        }

        assert_eq!(Attribute::from_name("fast blink"), Ok(FastBlink));
        assert_eq!(Attribute::from_name(""), Err(AttributeError::Empty));
        assert_eq!(Attribute::from_name("Bold"), Err(AttributeError::NotFound));
        assert!(Attribute::try_from(10_u8).is_err());
        assert!(Attribute::try_from(0_u8).is_err());
    }

    #[test]
    fn test_clearer_codes() {
        for clearer in Clearer::ALL {
            assert_eq!(Clearer::try_from(clearer.sgr()), Ok(clearer));
            assert_eq!(Clearer::from_name(clearer.name()), Ok(clearer));
        }

        assert_eq!(Clearer::RemoveIntensity.sgr(), 22);
        assert_eq!(Clearer::RemoveStrike.sgr(), 29);
        assert!(Clearer::try_from(26_u8).is_err());
        assert_eq!(Clearer::from_name("remove bold"), Err(AttributeError::NotFound));
    }

    #[test]
    fn test_styles() {
        use super::Attribute::*;

        let mut styles = Styles::default();
        assert!(styles.is_empty());
        assert_eq!(styles.render(), "");
        assert_eq!(styles.render_clear(), "");

        styles.set(Bold);
        assert_eq!(styles.render(), "1");
        assert_eq!(styles.render_clear(), "22");

        styles.set(Underline);
        assert_eq!(styles.render(), "1;4");
        assert_eq!(styles.render_clear(), "22;24");

        styles.set(Faint | DoubleUnderline);
        assert_eq!(styles.len(), 4);
        assert_eq!(styles.render(), "1;2;4;21");
        assert_eq!(styles.render_clear(), "22;24");

        styles.toggle(Bold | Strike);
        assert_eq!(styles, Faint | Underline | DoubleUnderline | Strike);
        assert_eq!(styles.render_clear(), "22;24;29");

        styles.clear(Underline | DoubleUnderline);
        assert_eq!(styles, Faint | Strike);
        assert!(styles.has(Faint | Strike));
        assert!(!styles.has(Faint | Italic));
        assert!(styles.has_any(Faint | Italic));
        assert!(!styles.has_any(Italic | Blink));

        // The empty set is contained in every set, but shares no bits.
        assert!(styles.has(Styles::EMPTY));
        assert!(!styles.has_any(Styles::EMPTY));

        assert_eq!(Styles::from_bits(0xffff).len(), 10);
        assert_eq!(Styles::from_bits(0xffff).render(), "1;2;3;4;5;6;7;8;9;21");
        assert_eq!(
            Styles::from_bits(0xffff).render_clear(),
            "22;23;24;25;27;28;29"
        );

        assert_eq!((Bold | Italic) - Italic, Styles::from(Bold));
        assert_eq!(format!("{:?}", Bold | Underline), "{Bold, Underline}");
        assert_eq!([Reverse, Conceal].into_iter().collect::<Styles>(), Reverse | Conceal);
    }

    proptest! {
        #[test]
        fn set_then_has(bits in 0u16..0x400, flags in 0u16..0x400) {
            let flags = Styles::from_bits(flags);
            let mut styles = Styles::from_bits(bits);

            styles.set(flags);
            prop_assert!(styles.has(flags));

            styles.clear(flags);
            prop_assert!(!styles.has_any(flags));
            if !flags.is_empty() {
                prop_assert!(!styles.has(flags));
            }
        }

        #[test]
        fn toggle_twice_is_identity(bits in 0u16..0x400, flags in 0u16..0x400) {
            let original = Styles::from_bits(bits);
            let mut styles = original;
            styles.toggle(Styles::from_bits(flags));
            styles.toggle(Styles::from_bits(flags));
            prop_assert_eq!(styles, original);
        }

        #[test]
        fn render_has_one_code_per_attribute(bits in 0u16..0x400) {
            let styles = Styles::from_bits(bits);
            let rendered = styles.render();
            let count = if rendered.is_empty() { 0 } else { rendered.split(';').count() };
            prop_assert_eq!(count, styles.len());
            prop_assert!(!rendered.ends_with(';'));
        }
    }
}
