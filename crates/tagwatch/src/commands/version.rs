//! Version command

use crate::cli::VersionArgs;
use crate::version::VersionInfo;
use anyhow::Result;

pub fn run(args: VersionArgs) -> Result<()> {
    let info = VersionInfo::current();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", info.display());
        println!("Tag:        {}", info.tag());

        if let Some(commit) = &info.commit {
            println!("Commit:     {}", commit);
        }
        if let Some(date) = &info.build_date {
            println!("Build date: {}", date);
        }
        if let Some(target) = &info.target {
            println!("Target:     {}", target);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagwatch_update::ReleaseTag;

    #[test]
    fn test_version_info_tag_is_valid_release_tag() {
        let info = VersionInfo::current();
        let tag = info.tag();
        assert!(
            ReleaseTag::parse(&tag).is_ok(),
            "running version should parse as a tag, got: {}",
            tag
        );
    }

    #[test]
    fn test_version_info_display_trait() {
        let info = VersionInfo::current();
        assert_eq!(format!("{}", info), info.display());
        assert!(info.display().starts_with("tagwatch "));
    }

    #[test]
    fn test_version_info_json_round_trip() {
        let info = VersionInfo::current();
        let json = serde_json::to_string(&info).expect("should serialize to JSON");
        let back: VersionInfo = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back.version, info.version);
    }

    #[test]
    fn test_version_info_display_with_all_fields() {
        let info = VersionInfo {
            version: "1.2.3".to_string(),
            commit: Some("abc1234".to_string()),
            build_date: Some("2026-01-01".to_string()),
            target: Some("x86_64-unknown-linux-gnu".to_string()),
        };
        assert_eq!(info.display(), "tagwatch 1.2.3 (abc1234) x86_64-unknown-linux-gnu");
    }

    #[test]
    fn test_version_command_runs() {
        run(VersionArgs { json: true }).unwrap();
        run(VersionArgs { json: false }).unwrap();
    }
}
