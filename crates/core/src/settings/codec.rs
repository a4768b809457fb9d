//! Fixed-layout binary codec for the settings record
//!
//! The serialized record is a constant-size little-endian blob: the
//! format version first, then every field at a fixed offset. Enums
//! serialize as their `u8` discriminant, the wake-gesture bitmap as one
//! byte with five meaningful bits. No length prefixes, no variable-length
//! fields.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │ version: u32                               │  Offset: 0
//! ├────────────────────────────────────────────┤
//! │ steps_goal: u32, screen_timeout_ms: u32    │  Offset: 4
//! ├────────────────────────────────────────────┤
//! │ enum tags, theme, wake bitmap, thresholds  │  Offset: 12
//! ├────────────────────────────────────────────┤
//! │ health goals, monitoring, ble flag         │  Offset: 28
//! └────────────────────────────────────────────┘
//! ```
//!
//! Decoding validates the version and every enum tag; any undeclared tag
//! rejects the whole blob so the caller falls back to defaults instead of
//! adopting a record that violates the enum-range invariant.

use super::error::SettingsError;
use super::record::{
    HealthGoals, HealthMonitoring, SettingsRecord, ThemeRecord, WatchFaceVariant,
    SETTINGS_VERSION,
};
use super::types::{
    BrightnessLevel, ChimesOption, ClockFace, ClockType, Color, GaugeStyle, Notification,
    WakeUpModes, WeatherStatus,
};

/// Size of the serialized record in bytes
pub const RECORD_SIZE: usize = 44;

/// Serialize a record into its fixed little-endian layout
pub fn encode(record: &SettingsRecord) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];

    buf[0..4].copy_from_slice(&record.version.to_le_bytes());
    buf[4..8].copy_from_slice(&record.steps_goal.to_le_bytes());
    buf[8..12].copy_from_slice(&record.screen_timeout_ms.to_le_bytes());

    buf[12] = record.clock_type as u8;
    buf[13] = record.notification_status as u8;
    buf[14] = record.clock_face as u8;
    buf[15] = record.chimes_option as u8;

    buf[16] = record.theme.color_time as u8;
    buf[17] = record.theme.color_bar as u8;
    buf[18] = record.theme.color_background as u8;
    buf[19] = record.theme.gauge_style as u8;
    buf[20] = record.theme.weather as u8;

    buf[21] = record.wake_up_modes.bits();
    buf[22..24].copy_from_slice(&record.shake_wake_threshold.to_le_bytes());
    buf[24] = record.raise_wrist_sensitivity;
    buf[25] = record.brightness_level as u8;

    buf[26] = record.watch_face_variant.show_side_cover as u8;
    buf[27] = record.watch_face_variant.color_index;

    buf[28..30].copy_from_slice(&record.health_goals.daily_steps.to_le_bytes());
    buf[30..32].copy_from_slice(&record.health_goals.daily_active_minutes.to_le_bytes());
    buf[32..34].copy_from_slice(&record.health_goals.weekly_workouts.to_le_bytes());
    buf[34] = record.health_goals.target_hr_min;
    buf[35] = record.health_goals.target_hr_max;
    buf[36] = record.health_goals.target_hrv;

    buf[37] = record.health_monitoring.continuous_hr as u8;
    buf[38] = record.health_monitoring.hrv_tracking as u8;
    buf[39] = record.health_monitoring.activity_reminders as u8;
    buf[40] = record.health_monitoring.health_alerts as u8;
    buf[41] = record.health_monitoring.reminder_interval_minutes;
    buf[42] = record.health_monitoring.cloud_sync as u8;

    buf[43] = record.ble_radio_enabled as u8;

    buf
}

/// Deserialize a record, validating version and every enum tag
pub fn decode(buf: &[u8]) -> Result<SettingsRecord, SettingsError> {
    if buf.len() < RECORD_SIZE {
        return Err(SettingsError::Malformed);
    }

    let version = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    if version != SETTINGS_VERSION {
        return Err(SettingsError::UnsupportedVersion);
    }

    let steps_goal = u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let screen_timeout_ms = u32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);

    let clock_type = ClockType::try_from(buf[12])?;
    let notification_status = Notification::try_from(buf[13])?;
    let clock_face = ClockFace::try_from(buf[14])?;
    let chimes_option = ChimesOption::try_from(buf[15])?;

    let theme = ThemeRecord {
        color_time: Color::try_from(buf[16])?,
        color_bar: Color::try_from(buf[17])?,
        color_background: Color::try_from(buf[18])?,
        gauge_style: GaugeStyle::try_from(buf[19])?,
        weather: WeatherStatus::try_from(buf[20])?,
    };

    let wake_up_modes = WakeUpModes::from_bits(buf[21]).ok_or(SettingsError::Malformed)?;
    let shake_wake_threshold = u16::from_le_bytes([buf[22], buf[23]]);
    let raise_wrist_sensitivity = buf[24];
    let brightness_level = BrightnessLevel::try_from(buf[25])?;

    let watch_face_variant = WatchFaceVariant {
        show_side_cover: buf[26] != 0,
        color_index: buf[27],
    };

    let health_goals = HealthGoals {
        daily_steps: u16::from_le_bytes([buf[28], buf[29]]),
        daily_active_minutes: u16::from_le_bytes([buf[30], buf[31]]),
        weekly_workouts: u16::from_le_bytes([buf[32], buf[33]]),
        target_hr_min: buf[34],
        target_hr_max: buf[35],
        target_hrv: buf[36],
    };

    let health_monitoring = HealthMonitoring {
        continuous_hr: buf[37] != 0,
        hrv_tracking: buf[38] != 0,
        activity_reminders: buf[39] != 0,
        health_alerts: buf[40] != 0,
        reminder_interval_minutes: buf[41],
        cloud_sync: buf[42] != 0,
    };

    let ble_radio_enabled = buf[43] != 0;

    Ok(SettingsRecord {
        version,
        steps_goal,
        screen_timeout_ms,
        clock_type,
        notification_status,
        clock_face,
        chimes_option,
        theme,
        wake_up_modes,
        shake_wake_threshold,
        raise_wrist_sensitivity,
        brightness_level,
        watch_face_variant,
        health_goals,
        health_monitoring,
        ble_radio_enabled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::types::WakeUpMode;

    #[test]
    fn version_is_first_field_little_endian() {
        let buf = encode(&SettingsRecord::default());
        assert_eq!(
            u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
            SETTINGS_VERSION
        );
    }

    #[test]
    fn encode_decode_round_trip_non_default_record() {
        let mut record = SettingsRecord::default();
        record.steps_goal = 8000;
        record.screen_timeout_ms = 30000;
        record.clock_type = ClockType::H12;
        record.clock_face = ClockFace::Dark;
        record.notification_status = Notification::Sleep;
        record.chimes_option = ChimesOption::HalfHours;
        record.theme.color_time = Color::Orange;
        record.theme.gauge_style = GaugeStyle::Numeric;
        record.theme.weather = WeatherStatus::Off;
        record.wake_up_modes = WakeUpMode::RaiseWrist.flag() | WakeUpMode::Shake.flag();
        record.shake_wake_threshold = 300;
        record.raise_wrist_sensitivity = 80;
        record.brightness_level = BrightnessLevel::High;
        record.watch_face_variant.show_side_cover = false;
        record.watch_face_variant.color_index = 5;
        record.health_goals.daily_steps = 12000;
        record.health_goals.target_hr_max = 170;
        record.health_monitoring.cloud_sync = true;
        record.health_monitoring.reminder_interval_minutes = 30;
        record.ble_radio_enabled = false;

        let decoded = decode(&encode(&record)).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn decode_rejects_short_buffer() {
        let buf = encode(&SettingsRecord::default());
        assert_eq!(
            decode(&buf[..RECORD_SIZE - 1]),
            Err(SettingsError::Malformed)
        );
    }

    #[test]
    fn decode_rejects_version_mismatch() {
        let mut buf = encode(&SettingsRecord::default());
        buf[0..4].copy_from_slice(&(SETTINGS_VERSION + 1).to_le_bytes());
        assert_eq!(decode(&buf), Err(SettingsError::UnsupportedVersion));
    }

    #[test]
    fn decode_rejects_out_of_range_enum_tag() {
        let mut buf = encode(&SettingsRecord::default());
        buf[16] = 18; // one past the last palette color
        assert_eq!(decode(&buf), Err(SettingsError::Malformed));
    }

    #[test]
    fn decode_rejects_undeclared_wake_bits() {
        let mut buf = encode(&SettingsRecord::default());
        buf[21] = 0b0010_0000;
        assert_eq!(decode(&buf), Err(SettingsError::Malformed));
    }

    #[test]
    fn trailing_bytes_beyond_record_are_ignored() {
        let mut long = [0u8; RECORD_SIZE + 16];
        long[..RECORD_SIZE].copy_from_slice(&encode(&SettingsRecord::default()));
        assert_eq!(decode(&long), Ok(SettingsRecord::default()));
    }
}
