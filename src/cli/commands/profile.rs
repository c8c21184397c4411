//! Profile command handler

use super::Session;
use crate::args::ProfileSubcommand;
use degree_planner::config::Config;
use degree_planner::core::models::Profile;
use degree_planner::core::store::RecordStore;
use degree_planner::info;

/// Dispatch profile subcommands
pub fn run(config: &Config, subcommand: Option<ProfileSubcommand>) -> Result<(), String> {
    match subcommand {
        None | Some(ProfileSubcommand::Show) => show(config),
        Some(ProfileSubcommand::Set {
            freshman,
            graduation,
            major,
        }) => set(config, freshman.as_deref(), graduation.as_deref(), major.as_deref()),
    }
}

fn show(config: &Config) -> Result<(), String> {
    let session = Session::open(config)?;
    let profile = session.profile()?;
    let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "(not set)".to_string());

    println!("\n=== Profile: {} ===\n", session.student);
    println!("Freshman semester:   {}", field(&profile.freshman_semester));
    println!("Graduation semester: {}", field(&profile.graduation_semester));
    println!("Major:               {}", field(&profile.major));
    if profile.planning_window().is_none() {
        println!("\nSet both semesters to enable the planning grid.");
    }
    Ok(())
}

/// Apply the given fields to a profile; `None` leaves a field unchanged
fn apply(
    profile: &mut Profile,
    freshman: Option<&str>,
    graduation: Option<&str>,
    major: Option<&str>,
) -> Result<(), String> {
    if let Some(value) = freshman {
        profile.set_freshman_semester(value)?;
    }
    if let Some(value) = graduation {
        profile.set_graduation_semester(value)?;
    }
    if let Some(value) = major {
        profile.set_major(value);
    }
    Ok(())
}

fn set(
    config: &Config,
    freshman: Option<&str>,
    graduation: Option<&str>,
    major: Option<&str>,
) -> Result<(), String> {
    if freshman.is_none() && graduation.is_none() && major.is_none() {
        return Err("Nothing to update: pass --freshman, --graduation or --major".to_string());
    }
    let mut session = Session::open(config)?;
    let mut profile = session.profile()?;
    apply(&mut profile, freshman, graduation, major)?;

    session
        .store
        .save_profile(&session.student, profile)
        .map_err(|e| format!("Failed to save profile: {e}"))?;
    info!("Profile updated for {}", session.student);
    println!("✓ Profile updated");
    Ok(())
}
