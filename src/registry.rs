use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinId(pub u32);

impl PinId {
    pub fn dir_name(&self) -> String {
        format!("gpio{}", self.0)
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedColor {
    Red,
    Green,
    Blue,
}

impl LedColor {
    // export order
    pub const ALL: [LedColor; 3] = [LedColor::Red, LedColor::Green, LedColor::Blue];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "red" => Some(LedColor::Red),
            "green" => Some(LedColor::Green),
            "blue" => Some(LedColor::Blue),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LedColor::Red => "red",
            LedColor::Green => "green",
            LedColor::Blue => "blue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinState {
    On,
    Off,
}

impl PinState {
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "on" => Some(PinState::On),
            "off" => Some(PinState::Off),
            _ => None,
        }
    }

    pub fn word(&self) -> &'static str {
        match self {
            PinState::On => "on",
            PinState::Off => "off",
        }
    }

    pub fn sysfs_value(&self) -> &'static str {
        match self {
            PinState::On => "1",
            PinState::Off => "0",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinRegistry {
    pub red: PinId,
    pub green: PinId,
    pub blue: PinId,
}

impl PinRegistry {
    /// BeagleBone wiring: P9_12 (GPIO1_28), P9_14 (GPIO1_18), P9_16 (GPIO1_19).
    pub const BEAGLEBONE: PinRegistry = PinRegistry {
        red: PinId(60),
        green: PinId(50),
        blue: PinId(51),
    };

    pub fn pin(&self, color: LedColor) -> PinId {
        match color {
            LedColor::Red => self.red,
            LedColor::Green => self.green,
            LedColor::Blue => self.blue,
        }
    }

    pub fn resolve_color(&self, name: &str) -> Option<PinId> {
        LedColor::from_name(name).map(|color| self.pin(color))
    }

    pub fn export_set(&self) -> [PinId; 3] {
        LedColor::ALL.map(|color| self.pin(color))
    }
}

impl Default for PinRegistry {
    fn default() -> Self {
        PinRegistry::BEAGLEBONE
    }
}
