//! Persisted settings record
//!
//! [`SettingsRecord`] is the single aggregate that gets serialized to
//! durable storage. It is constructed with compiled-in defaults and only
//! ever replaced wholesale by a successful load; field-level migration is
//! deliberately not supported (a version mismatch resets to defaults).

use super::types::{
    BrightnessLevel, ChimesOption, ClockFace, ClockType, Color, GaugeStyle, Notification,
    WakeUpModes, WeatherStatus,
};

/// Current settings format version
///
/// Written with every save and compared on load; the sole migration
/// discriminant. Bump it whenever the serialized layout changes.
pub const SETTINGS_VERSION: u32 = 7;

/// Watch-face theme colors and gauge style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeRecord {
    pub color_time: Color,
    pub color_bar: Color,
    pub color_background: Color,
    pub gauge_style: GaugeStyle,
    pub weather: WeatherStatus,
}

impl Default for ThemeRecord {
    fn default() -> Self {
        Self {
            color_time: Color::Teal,
            color_bar: Color::Teal,
            color_background: Color::Black,
            gauge_style: GaugeStyle::Full,
            weather: WeatherStatus::On,
        }
    }
}

/// Daily and weekly health targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthGoals {
    pub daily_steps: u16,
    pub daily_active_minutes: u16,
    pub weekly_workouts: u16,
    pub target_hr_min: u8,
    pub target_hr_max: u8,
    pub target_hrv: u8,
}

impl Default for HealthGoals {
    fn default() -> Self {
        Self {
            daily_steps: 10000,
            daily_active_minutes: 30,
            weekly_workouts: 3,
            target_hr_min: 60,
            target_hr_max: 150,
            target_hrv: 50,
        }
    }
}

/// Background health-monitoring policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthMonitoring {
    pub continuous_hr: bool,
    pub hrv_tracking: bool,
    pub activity_reminders: bool,
    pub health_alerts: bool,
    pub reminder_interval_minutes: u8,
    pub cloud_sync: bool,
}

impl Default for HealthMonitoring {
    fn default() -> Self {
        Self {
            continuous_hr: true,
            hrv_tracking: true,
            activity_reminders: true,
            health_alerts: true,
            reminder_interval_minutes: 60,
            cloud_sync: false,
        }
    }
}

/// Face-specific cosmetic options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchFaceVariant {
    pub show_side_cover: bool,
    pub color_index: u8,
}

impl Default for WatchFaceVariant {
    fn default() -> Self {
        Self {
            show_side_cover: true,
            color_index: 0,
        }
    }
}

/// The persisted settings aggregate
///
/// Exactly one record exists per device session, exclusively owned by
/// [`super::SettingsController`]. In-session UI state (menu cursors) is
/// intentionally not part of this record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsRecord {
    pub version: u32,
    pub steps_goal: u32,
    pub screen_timeout_ms: u32,

    pub clock_type: ClockType,
    pub notification_status: Notification,
    pub clock_face: ClockFace,
    pub chimes_option: ChimesOption,

    pub theme: ThemeRecord,

    pub wake_up_modes: WakeUpModes,
    pub shake_wake_threshold: u16,
    /// Raise-to-wake sensitivity, conceptually owned by the RaiseWrist
    /// gesture but stored as a sibling of the bitmap.
    pub raise_wrist_sensitivity: u8,
    pub brightness_level: BrightnessLevel,

    pub watch_face_variant: WatchFaceVariant,

    pub health_goals: HealthGoals,
    pub health_monitoring: HealthMonitoring,

    pub ble_radio_enabled: bool,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            steps_goal: 10000,
            screen_timeout_ms: 15000,
            clock_type: ClockType::H24,
            notification_status: Notification::On,
            clock_face: ClockFace::Light,
            chimes_option: ChimesOption::None,
            theme: ThemeRecord::default(),
            wake_up_modes: WakeUpModes::empty(),
            shake_wake_threshold: 150,
            raise_wrist_sensitivity: 50,
            brightness_level: BrightnessLevel::Medium,
            watch_face_variant: WatchFaceVariant::default(),
            health_goals: HealthGoals::default(),
            health_monitoring: HealthMonitoring::default(),
            ble_radio_enabled: true,
        }
    }
}
