//! Settings field enumerations
//!
//! Every persisted enum carries an explicit `u8` discriminant because the
//! discriminant is also its wire tag in the serialized record. `TryFrom<u8>`
//! impls are the decode guards: a stored tag outside the declared range is
//! rejected rather than smuggled into an out-of-range enum value.

use bitflags::bitflags;

use super::error::SettingsError;

/// Number of compiled-in watch faces
pub const WATCH_FACE_COUNT: u8 = 2;

/// Active watch-face variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ClockFace {
    /// Light theme face
    Light = 0,
    /// Dark theme face
    Dark = 1,
}

/// Time display format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ClockType {
    H24 = 0,
    H12 = 1,
}

/// Notification policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Notification {
    On = 0,
    Off = 1,
    Sleep = 2,
}

/// Hourly chime policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ChimesOption {
    None = 0,
    Hours = 1,
    HalfHours = 2,
}

/// Wake gesture, used as a bit index into [`WakeUpModes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WakeUpMode {
    SingleTap = 0,
    DoubleTap = 1,
    RaiseWrist = 2,
    Shake = 3,
    LowerWrist = 4,
}

bitflags! {
    /// Enabled wake gestures (one bit per [`WakeUpMode`])
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct WakeUpModes: u8 {
        const SINGLE_TAP = 1 << 0;
        const DOUBLE_TAP = 1 << 1;
        const RAISE_WRIST = 1 << 2;
        const SHAKE = 1 << 3;
        const LOWER_WRIST = 1 << 4;
    }
}

impl WakeUpMode {
    /// Bitmap flag for this gesture
    pub fn flag(self) -> WakeUpModes {
        match self {
            WakeUpMode::SingleTap => WakeUpModes::SINGLE_TAP,
            WakeUpMode::DoubleTap => WakeUpModes::DOUBLE_TAP,
            WakeUpMode::RaiseWrist => WakeUpModes::RAISE_WRIST,
            WakeUpMode::Shake => WakeUpModes::SHAKE,
            WakeUpMode::LowerWrist => WakeUpModes::LOWER_WRIST,
        }
    }
}

/// Watch-face color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Silver = 1,
    Gray = 2,
    Black = 3,
    Red = 4,
    Maroon = 5,
    Yellow = 6,
    Olive = 7,
    Lime = 8,
    Green = 9,
    Cyan = 10,
    Teal = 11,
    Blue = 12,
    Navy = 13,
    Magenta = 14,
    Purple = 15,
    Orange = 16,
    Pink = 17,
}

/// Backlight brightness level
///
/// Owned by the brightness controller on the device; stored here so the
/// chosen level survives a reboot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BrightnessLevel {
    Off = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

/// Health gauge rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GaugeStyle {
    Full = 0,
    Half = 1,
    Numeric = 2,
}

/// Weather display on the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WeatherStatus {
    On = 0,
    Off = 1,
}

impl TryFrom<u8> for ClockFace {
    type Error = SettingsError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(ClockFace::Light),
            1 => Ok(ClockFace::Dark),
            _ => Err(SettingsError::Malformed),
        }
    }
}

impl TryFrom<u8> for ClockType {
    type Error = SettingsError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(ClockType::H24),
            1 => Ok(ClockType::H12),
            _ => Err(SettingsError::Malformed),
        }
    }
}

impl TryFrom<u8> for Notification {
    type Error = SettingsError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Notification::On),
            1 => Ok(Notification::Off),
            2 => Ok(Notification::Sleep),
            _ => Err(SettingsError::Malformed),
        }
    }
}

impl TryFrom<u8> for ChimesOption {
    type Error = SettingsError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(ChimesOption::None),
            1 => Ok(ChimesOption::Hours),
            2 => Ok(ChimesOption::HalfHours),
            _ => Err(SettingsError::Malformed),
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = SettingsError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Color::White),
            1 => Ok(Color::Silver),
            2 => Ok(Color::Gray),
            3 => Ok(Color::Black),
            4 => Ok(Color::Red),
            5 => Ok(Color::Maroon),
            6 => Ok(Color::Yellow),
            7 => Ok(Color::Olive),
            8 => Ok(Color::Lime),
            9 => Ok(Color::Green),
            10 => Ok(Color::Cyan),
            11 => Ok(Color::Teal),
            12 => Ok(Color::Blue),
            13 => Ok(Color::Navy),
            14 => Ok(Color::Magenta),
            15 => Ok(Color::Purple),
            16 => Ok(Color::Orange),
            17 => Ok(Color::Pink),
            _ => Err(SettingsError::Malformed),
        }
    }
}

impl TryFrom<u8> for BrightnessLevel {
    type Error = SettingsError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(BrightnessLevel::Off),
            1 => Ok(BrightnessLevel::Low),
            2 => Ok(BrightnessLevel::Medium),
            3 => Ok(BrightnessLevel::High),
            _ => Err(SettingsError::Malformed),
        }
    }
}

impl TryFrom<u8> for GaugeStyle {
    type Error = SettingsError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(GaugeStyle::Full),
            1 => Ok(GaugeStyle::Half),
            2 => Ok(GaugeStyle::Numeric),
            _ => Err(SettingsError::Malformed),
        }
    }
}

impl TryFrom<u8> for WeatherStatus {
    type Error = SettingsError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(WeatherStatus::On),
            1 => Ok(WeatherStatus::Off),
            _ => Err(SettingsError::Malformed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wake_up_mode_flag_mapping() {
        assert_eq!(WakeUpMode::SingleTap.flag(), WakeUpModes::SINGLE_TAP);
        assert_eq!(WakeUpMode::RaiseWrist.flag(), WakeUpModes::RAISE_WRIST);
        assert_eq!(WakeUpMode::LowerWrist.flag(), WakeUpModes::LOWER_WRIST);
        assert_eq!(WakeUpMode::LowerWrist.flag().bits(), 1 << 4);
    }

    #[test]
    fn wake_up_modes_reject_unknown_bits() {
        assert!(WakeUpModes::from_bits(0b0001_1111).is_some());
        assert!(WakeUpModes::from_bits(0b0010_0000).is_none());
    }

    #[test]
    fn enum_tags_round_trip() {
        assert_eq!(ClockFace::try_from(ClockFace::Dark as u8), Ok(ClockFace::Dark));
        assert_eq!(Color::try_from(Color::Pink as u8), Ok(Color::Pink));
        assert_eq!(
            BrightnessLevel::try_from(BrightnessLevel::High as u8),
            Ok(BrightnessLevel::High)
        );
    }

    #[test]
    fn out_of_range_tags_rejected() {
        assert!(ClockFace::try_from(2).is_err());
        assert!(Notification::try_from(3).is_err());
        assert!(Color::try_from(18).is_err());
        assert!(GaugeStyle::try_from(3).is_err());
        assert!(WeatherStatus::try_from(2).is_err());
    }
}
