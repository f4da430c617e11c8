use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::BopomofoError;

const INITIALS: &[char] = &[
    'ㄅ', 'ㄆ', 'ㄇ', 'ㄈ', 'ㄉ', 'ㄊ', 'ㄋ', 'ㄌ', 'ㄍ', 'ㄎ', 'ㄏ', 'ㄐ', 'ㄑ', 'ㄒ', 'ㄓ', 'ㄔ',
    'ㄕ', 'ㄖ', 'ㄗ', 'ㄘ', 'ㄙ',
];
const MEDIALS: &[char] = &['ㄧ', 'ㄨ', 'ㄩ'];
const FINALS: &[char] = &[
    'ㄚ', 'ㄛ', 'ㄜ', 'ㄝ', 'ㄞ', 'ㄟ', 'ㄠ', 'ㄡ', 'ㄢ', 'ㄣ', 'ㄤ', 'ㄥ', 'ㄦ',
];
const TONES: &[char] = &['˙', 'ˊ', 'ˇ', 'ˋ'];

/// Anchored syllable grammar: each component is optional, in fixed order.
static SYLLABLE: Lazy<Regex> = Lazy::new(|| {
    let groups: String = Component::ALL
        .iter()
        .map(|c| {
            let class: String = c.alphabet().iter().collect();
            format!("(?P<{}>[{}]?)", c.name(), regex::escape(&class))
        })
        .collect();
    Regex::new(&format!("^{groups}$")).expect("bopomofo: syllable pattern must compile")
});

/// One of the four phonetic components of a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Initial,
    Medial,
    Final,
    Tone,
}

impl Component {
    /// All components in the order they appear inside a syllable.
    pub const ALL: [Component; 4] = [
        Component::Initial,
        Component::Medial,
        Component::Final,
        Component::Tone,
    ];

    /// The symbols this component may take, in code order.
    pub const fn alphabet(self) -> &'static [char] {
        match self {
            Component::Initial => INITIALS,
            Component::Medial => MEDIALS,
            Component::Final => FINALS,
            Component::Tone => TONES,
        }
    }

    /// Bit offset of this component's field inside a [`SyllableCode`].
    pub const fn shift(self) -> u32 {
        match self {
            Component::Initial => 9,
            Component::Medial => 7,
            Component::Final => 3,
            Component::Tone => 0,
        }
    }

    /// Field mask applied after shifting.
    pub const fn mask(self) -> u16 {
        match self {
            Component::Initial => 0x1f,
            Component::Medial => 0x3,
            Component::Final => 0xf,
            Component::Tone => 0x7,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Component::Initial => "initial",
            Component::Medial => "medial",
            Component::Final => "final",
            Component::Tone => "tone",
        }
    }
}

/// A syllable packed into 14 bits: `initial(5) medial(2) final(4) tone(3)`.
///
/// Each field stores the symbol's 1-based index in its alphabet, or 0 when
/// the component is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SyllableCode(u16);

impl SyllableCode {
    /// Wraps a raw code. Bits outside the four fields are kept but never compared.
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Returns the raw field value of `component` (0 = absent).
    #[inline]
    pub const fn field(self, component: Component) -> u16 {
        (self.0 >> component.shift()) & component.mask()
    }

    /// Returns the symbol stored for `component`, if any.
    pub fn symbol(self, component: Component) -> Option<char> {
        match self.field(component) {
            0 => None,
            n => component.alphabet().get(usize::from(n) - 1).copied(),
        }
    }

    pub fn initial(self) -> Option<char> {
        self.symbol(Component::Initial)
    }

    pub fn medial(self) -> Option<char> {
        self.symbol(Component::Medial)
    }

    pub fn final_(self) -> Option<char> {
        self.symbol(Component::Final)
    }

    pub fn tone(self) -> Option<char> {
        self.symbol(Component::Tone)
    }

    /// Number of components (0..=4) on which the two syllables differ.
    #[inline]
    pub fn distance(self, other: SyllableCode) -> u32 {
        Component::ALL
            .iter()
            .filter(|&&c| self.field(c) != other.field(c))
            .count() as u32
    }
}

impl fmt::Display for SyllableCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in Component::ALL {
            if let Some(ch) = self.symbol(c) {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for SyllableCode {
    type Err = BopomofoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        encode(s)
    }
}

/// Encodes one syllable such as `ㄘㄜˋ` into its packed code.
///
/// The whole input must be consumed and at least one component must be
/// present.
///
/// # Errors
/// Returns [`BopomofoError::InvalidSyllable`] otherwise.
pub fn encode(syllable: &str) -> Result<SyllableCode, BopomofoError> {
    let invalid = || BopomofoError::InvalidSyllable {
        syllable: syllable.to_string(),
    };

    let caps = SYLLABLE.captures(syllable).ok_or_else(invalid)?;

    let mut code = 0u16;
    for c in Component::ALL {
        let Some(ch) = caps.name(c.name()).and_then(|m| m.as_str().chars().next()) else {
            continue;
        };
        let idx = c.alphabet().iter().position(|&x| x == ch).ok_or_else(invalid)?;
        code |= ((idx as u16) + 1) << c.shift();
    }

    if code == 0 {
        return Err(invalid());
    }
    Ok(SyllableCode(code))
}
