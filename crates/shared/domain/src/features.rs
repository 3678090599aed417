use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const NATIVE: &str = "native";
pub const SCRIPT: &str = "script";

bitflags! {
    /// Discovery sources a build of the library carries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct OpSources: u32 {
        /// Natively compiled custom operators.
        const NATIVE = 1 << 0;
        /// Operators backed by the embedded scripting interpreter.
        const SCRIPT = 1 << 1;

        const ALL = Self::NATIVE.bits() | Self::SCRIPT.bits();
    }
}

impl OpSources {
    /// Names of the contained sources, in flag order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(2);
        if self.contains(Self::NATIVE) {
            names.push(NATIVE);
        }
        if self.contains(Self::SCRIPT) {
            names.push(SCRIPT);
        }
        names
    }
}

impl From<&str> for OpSources {
    fn from(s: &str) -> Self {
        match s {
            NATIVE => Self::NATIVE,
            SCRIPT => Self::SCRIPT,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for OpSources {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

/// Serialized as the list of source names (`["native", "script"]`).
impl Serialize for OpSources {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.names())
    }
}

/// Unknown names are ignored.
impl<'de> Deserialize<'de> for OpSources {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(names.iter().fold(Self::empty(), |acc, name| acc | Self::from(name.as_str())))
    }
}
