//! Settings controller
//!
//! [`SettingsController`] owns the in-memory [`SettingsRecord`] and the
//! injected [`BlobStore`] backend. Typed setters compare old and new
//! values and raise a single record-wide dirty flag only on an actual
//! change, so the periodic [`save`](SettingsController::save) stays a
//! no-op while nothing changed. Backend failures are absorbed: a failed
//! load keeps defaults, a failed save keeps the dirty flag set so a
//! later save retries.

use super::codec::{self, RECORD_SIZE};
use super::error::SettingsError;
use super::record::{SettingsRecord, SETTINGS_VERSION};
use super::types::{
    BrightnessLevel, ChimesOption, ClockFace, ClockType, Color, GaugeStyle, Notification,
    WakeUpMode, WakeUpModes, WeatherStatus,
};
use crate::traits::BlobStore;

/// Blob identifier the settings record is stored under
pub const SETTINGS_BLOB_KEY: &str = "settings";

/// Stateful service owning the device settings
///
/// Construct with [`new`](SettingsController::new), call
/// [`init`](SettingsController::init) once at startup to adopt any
/// persisted state, then mutate through the typed setters and call
/// [`save`](SettingsController::save) at save-worthy checkpoints
/// (entering sleep, leaving a settings menu).
///
/// Single execution context assumed; callers provide serialization if
/// multiple contexts can mutate settings.
pub struct SettingsController<S: BlobStore> {
    store: S,
    record: SettingsRecord,
    dirty: bool,

    // In-session UI state, never persisted.
    app_menu: u8,
    settings_menu: u8,
}

impl<S: BlobStore> SettingsController<S> {
    /// Create a controller holding compiled-in defaults
    pub fn new(store: S) -> Self {
        Self {
            store,
            record: SettingsRecord::default(),
            dirty: false,
            app_menu: 0,
            settings_menu: 0,
        }
    }

    /// Load persisted settings, falling back silently to defaults
    ///
    /// The record is replaced wholesale on a successful load; a missing,
    /// unreadable, corrupt, or wrong-version blob leaves the defaults in
    /// place. Loading never marks the record dirty.
    pub fn init(&mut self) {
        let mut buf = [0u8; RECORD_SIZE];
        if let Ok(n) = self.store.read(SETTINGS_BLOB_KEY, &mut buf) {
            if let Ok(record) = codec::decode(&buf[..n]) {
                self.record = record;
            }
        }
    }

    /// Persist the record if it has unsaved changes
    ///
    /// A clean record is a no-op (no backend call). On a write failure
    /// the dirty flag stays set so a future call retries; there is no
    /// partial-write state at this level.
    pub fn save(&mut self) -> Result<(), SettingsError> {
        if !self.dirty {
            return Ok(());
        }

        self.record.version = SETTINGS_VERSION;
        let buf = codec::encode(&self.record);
        self.store.write(SETTINGS_BLOB_KEY, &buf)?;
        self.dirty = false;
        Ok(())
    }

    /// Whether the in-memory record differs from the last saved state
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Borrow the backend store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the backend store
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn clock_face(&self) -> ClockFace {
        self.record.clock_face
    }

    pub fn set_clock_face(&mut self, face: ClockFace) {
        if face != self.record.clock_face {
            self.dirty = true;
        }
        self.record.clock_face = face;
    }

    pub fn clock_type(&self) -> ClockType {
        self.record.clock_type
    }

    pub fn set_clock_type(&mut self, clock_type: ClockType) {
        if clock_type != self.record.clock_type {
            self.dirty = true;
        }
        self.record.clock_type = clock_type;
    }

    pub fn notification_status(&self) -> Notification {
        self.record.notification_status
    }

    pub fn set_notification_status(&mut self, status: Notification) {
        if status != self.record.notification_status {
            self.dirty = true;
        }
        self.record.notification_status = status;
    }

    pub fn chimes_option(&self) -> ChimesOption {
        self.record.chimes_option
    }

    pub fn set_chimes_option(&mut self, option: ChimesOption) {
        if option != self.record.chimes_option {
            self.dirty = true;
        }
        self.record.chimes_option = option;
    }

    pub fn screen_timeout_ms(&self) -> u32 {
        self.record.screen_timeout_ms
    }

    pub fn set_screen_timeout_ms(&mut self, timeout: u32) {
        if timeout != self.record.screen_timeout_ms {
            self.dirty = true;
        }
        self.record.screen_timeout_ms = timeout;
    }

    pub fn steps_goal(&self) -> u32 {
        self.record.steps_goal
    }

    pub fn set_steps_goal(&mut self, goal: u32) {
        if goal != self.record.steps_goal {
            self.dirty = true;
        }
        self.record.steps_goal = goal;
    }

    /// Enabled wake gestures as a bitmap
    pub fn wake_up_modes(&self) -> WakeUpModes {
        self.record.wake_up_modes
    }

    pub fn is_wake_up_mode_on(&self, mode: WakeUpMode) -> bool {
        self.record.wake_up_modes.contains(mode.flag())
    }

    /// Toggle a single wake gesture
    pub fn set_wake_up_mode(&mut self, mode: WakeUpMode, enabled: bool) {
        if enabled != self.is_wake_up_mode_on(mode) {
            self.dirty = true;
        }
        self.record.wake_up_modes.set(mode.flag(), enabled);
    }

    /// Sensitivity for the RaiseWrist gesture
    pub fn raise_wrist_sensitivity(&self) -> u8 {
        self.record.raise_wrist_sensitivity
    }

    pub fn set_raise_wrist_sensitivity(&mut self, sensitivity: u8) {
        if sensitivity != self.record.raise_wrist_sensitivity {
            self.dirty = true;
        }
        self.record.raise_wrist_sensitivity = sensitivity;
    }

    pub fn shake_wake_threshold(&self) -> u16 {
        self.record.shake_wake_threshold
    }

    pub fn set_shake_wake_threshold(&mut self, threshold: u16) {
        if threshold != self.record.shake_wake_threshold {
            self.dirty = true;
        }
        self.record.shake_wake_threshold = threshold;
    }

    pub fn brightness_level(&self) -> BrightnessLevel {
        self.record.brightness_level
    }

    pub fn set_brightness_level(&mut self, level: BrightnessLevel) {
        if level != self.record.brightness_level {
            self.dirty = true;
        }
        self.record.brightness_level = level;
    }

    pub fn theme_color_time(&self) -> Color {
        self.record.theme.color_time
    }

    pub fn set_theme_color_time(&mut self, color: Color) {
        if color != self.record.theme.color_time {
            self.dirty = true;
        }
        self.record.theme.color_time = color;
    }

    pub fn theme_color_bar(&self) -> Color {
        self.record.theme.color_bar
    }

    pub fn set_theme_color_bar(&mut self, color: Color) {
        if color != self.record.theme.color_bar {
            self.dirty = true;
        }
        self.record.theme.color_bar = color;
    }

    pub fn theme_color_background(&self) -> Color {
        self.record.theme.color_background
    }

    pub fn set_theme_color_background(&mut self, color: Color) {
        if color != self.record.theme.color_background {
            self.dirty = true;
        }
        self.record.theme.color_background = color;
    }

    pub fn gauge_style(&self) -> GaugeStyle {
        self.record.theme.gauge_style
    }

    pub fn set_gauge_style(&mut self, style: GaugeStyle) {
        if style != self.record.theme.gauge_style {
            self.dirty = true;
        }
        self.record.theme.gauge_style = style;
    }

    pub fn weather_status(&self) -> WeatherStatus {
        self.record.theme.weather
    }

    pub fn set_weather_status(&mut self, status: WeatherStatus) {
        if status != self.record.theme.weather {
            self.dirty = true;
        }
        self.record.theme.weather = status;
    }

    pub fn show_side_cover(&self) -> bool {
        self.record.watch_face_variant.show_side_cover
    }

    pub fn set_show_side_cover(&mut self, show: bool) {
        if show != self.record.watch_face_variant.show_side_cover {
            self.dirty = true;
        }
        self.record.watch_face_variant.show_side_cover = show;
    }

    pub fn watch_face_color_index(&self) -> u8 {
        self.record.watch_face_variant.color_index
    }

    pub fn set_watch_face_color_index(&mut self, index: u8) {
        if index != self.record.watch_face_variant.color_index {
            self.dirty = true;
        }
        self.record.watch_face_variant.color_index = index;
    }

    pub fn daily_steps(&self) -> u16 {
        self.record.health_goals.daily_steps
    }

    pub fn set_daily_steps(&mut self, steps: u16) {
        if steps != self.record.health_goals.daily_steps {
            self.dirty = true;
        }
        self.record.health_goals.daily_steps = steps;
    }

    pub fn daily_active_minutes(&self) -> u16 {
        self.record.health_goals.daily_active_minutes
    }

    pub fn set_daily_active_minutes(&mut self, minutes: u16) {
        if minutes != self.record.health_goals.daily_active_minutes {
            self.dirty = true;
        }
        self.record.health_goals.daily_active_minutes = minutes;
    }

    pub fn weekly_workouts(&self) -> u16 {
        self.record.health_goals.weekly_workouts
    }

    pub fn set_weekly_workouts(&mut self, workouts: u16) {
        if workouts != self.record.health_goals.weekly_workouts {
            self.dirty = true;
        }
        self.record.health_goals.weekly_workouts = workouts;
    }

    pub fn target_hr_min(&self) -> u8 {
        self.record.health_goals.target_hr_min
    }

    pub fn set_target_hr_min(&mut self, bpm: u8) {
        if bpm != self.record.health_goals.target_hr_min {
            self.dirty = true;
        }
        self.record.health_goals.target_hr_min = bpm;
    }

    pub fn target_hr_max(&self) -> u8 {
        self.record.health_goals.target_hr_max
    }

    pub fn set_target_hr_max(&mut self, bpm: u8) {
        if bpm != self.record.health_goals.target_hr_max {
            self.dirty = true;
        }
        self.record.health_goals.target_hr_max = bpm;
    }

    pub fn target_hrv(&self) -> u8 {
        self.record.health_goals.target_hrv
    }

    pub fn set_target_hrv(&mut self, hrv: u8) {
        if hrv != self.record.health_goals.target_hrv {
            self.dirty = true;
        }
        self.record.health_goals.target_hrv = hrv;
    }

    pub fn continuous_hr_monitoring(&self) -> bool {
        self.record.health_monitoring.continuous_hr
    }

    pub fn set_continuous_hr_monitoring(&mut self, enabled: bool) {
        if enabled != self.record.health_monitoring.continuous_hr {
            self.dirty = true;
        }
        self.record.health_monitoring.continuous_hr = enabled;
    }

    pub fn hrv_tracking(&self) -> bool {
        self.record.health_monitoring.hrv_tracking
    }

    pub fn set_hrv_tracking(&mut self, enabled: bool) {
        if enabled != self.record.health_monitoring.hrv_tracking {
            self.dirty = true;
        }
        self.record.health_monitoring.hrv_tracking = enabled;
    }

    pub fn activity_reminders(&self) -> bool {
        self.record.health_monitoring.activity_reminders
    }

    pub fn set_activity_reminders(&mut self, enabled: bool) {
        if enabled != self.record.health_monitoring.activity_reminders {
            self.dirty = true;
        }
        self.record.health_monitoring.activity_reminders = enabled;
    }

    pub fn health_alerts(&self) -> bool {
        self.record.health_monitoring.health_alerts
    }

    pub fn set_health_alerts(&mut self, enabled: bool) {
        if enabled != self.record.health_monitoring.health_alerts {
            self.dirty = true;
        }
        self.record.health_monitoring.health_alerts = enabled;
    }

    pub fn reminder_interval_minutes(&self) -> u8 {
        self.record.health_monitoring.reminder_interval_minutes
    }

    pub fn set_reminder_interval_minutes(&mut self, minutes: u8) {
        if minutes != self.record.health_monitoring.reminder_interval_minutes {
            self.dirty = true;
        }
        self.record.health_monitoring.reminder_interval_minutes = minutes;
    }

    pub fn cloud_sync_enabled(&self) -> bool {
        self.record.health_monitoring.cloud_sync
    }

    pub fn set_cloud_sync_enabled(&mut self, enabled: bool) {
        if enabled != self.record.health_monitoring.cloud_sync {
            self.dirty = true;
        }
        self.record.health_monitoring.cloud_sync = enabled;
    }

    pub fn ble_radio_enabled(&self) -> bool {
        self.record.ble_radio_enabled
    }

    /// Radio state is live state; toggling it never forces a save
    pub fn set_ble_radio_enabled(&mut self, enabled: bool) {
        self.record.ble_radio_enabled = enabled;
    }

    /// Last-selected app menu page, in-session only
    pub fn app_menu(&self) -> u8 {
        self.app_menu
    }

    pub fn set_app_menu(&mut self, menu: u8) {
        self.app_menu = menu;
    }

    /// Last-selected settings menu page, in-session only
    pub fn settings_menu(&self) -> u8 {
        self.settings_menu
    }

    pub fn set_settings_menu(&mut self, menu: u8) {
        self.settings_menu = menu;
    }
}
