//! Walks the settings lifecycle on a simulated flash: boot with
//! defaults, mutate, save, reboot, and show what survived.
//!
//! Run with: cargo run -p tidewatch_sim --example settings_demo

use tidewatch_core::settings::{ClockFace, Color, SettingsController, WakeUpMode};
use tidewatch_firmware::storage::FlashBlobStore;
use tidewatch_sim::MemoryFlash;

fn main() {
    let flash = MemoryFlash::new(0x050000);
    let mut settings = SettingsController::new(FlashBlobStore::new(flash));
    settings.init();

    println!("first boot (blank flash):");
    println!("  clock face      {:?}", settings.clock_face());
    println!("  steps goal      {}", settings.steps_goal());
    println!("  dirty           {}", settings.is_dirty());

    settings.set_clock_face(ClockFace::Dark);
    settings.set_steps_goal(8000);
    settings.set_theme_color_time(Color::Orange);
    settings.set_wake_up_mode(WakeUpMode::RaiseWrist, true);
    println!("after changes, dirty = {}", settings.is_dirty());

    settings.save().expect("save failed");
    println!("saved, dirty = {}", settings.is_dirty());

    // "Reboot": a fresh controller over the same flash image.
    let flash = settings.store().flash().clone();
    let mut settings = SettingsController::new(FlashBlobStore::new(flash));
    settings.init();

    println!("after reboot:");
    println!("  clock face      {:?}", settings.clock_face());
    println!("  steps goal      {}", settings.steps_goal());
    println!("  time color      {:?}", settings.theme_color_time());
    println!(
        "  raise wrist     {}",
        settings.is_wake_up_mode_on(WakeUpMode::RaiseWrist)
    );
}
