//! Pure merge of a descriptor with optionally-available live metadata.

use crate::repos::models::{MergedRepo, RepoDescriptor, RepoInfo};

/// Merges one descriptor with its live result, if any.
///
/// Each live field overrides the descriptor field independently when present;
/// absent live data falls back to the descriptor plus zero stars and no
/// update time.
pub fn merge(descriptor: &RepoDescriptor, home_owner: &str, live: Option<&RepoInfo>) -> MergedRepo {
    let display_name = display_name(descriptor, home_owner);
    let fallback_url = format!("https://github.com/{}/{}", descriptor.owner, descriptor.name);

    match live {
        Some(info) => MergedRepo {
            display_name,
            url: info.html_url.clone().unwrap_or(fallback_url),
            description: info
                .description
                .clone()
                .unwrap_or_else(|| descriptor.description.clone()),
            language: info
                .language
                .clone()
                .unwrap_or_else(|| descriptor.language.clone()),
            stars: info.stargazers_count.unwrap_or(0),
            updated_at: info.updated_at,
            live: true,
        },
        None => MergedRepo {
            display_name,
            url: fallback_url,
            description: descriptor.description.clone(),
            language: descriptor.language.clone(),
            stars: 0,
            updated_at: None,
            live: false,
        },
    }
}

/// Merges a whole catalog against positionally-matched live results,
/// preserving catalog order.
pub fn merge_all(
    catalog: &[RepoDescriptor],
    live: &[Option<RepoInfo>],
    home_owner: &str,
) -> Vec<MergedRepo> {
    catalog
        .iter()
        .enumerate()
        .map(|(idx, descriptor)| {
            merge(
                descriptor,
                home_owner,
                live.get(idx).and_then(|info| info.as_ref()),
            )
        })
        .collect()
}

/// Bare repo name for the home owner, `"{owner}/{name}"` for anyone else.
pub fn display_name(descriptor: &RepoDescriptor, home_owner: &str) -> String {
    if descriptor.owner.eq_ignore_ascii_case(home_owner) {
        descriptor.name.clone()
    } else {
        format!("{}/{}", descriptor.owner, descriptor.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn descriptor() -> RepoDescriptor {
        RepoDescriptor {
            owner: "arhan".to_string(),
            name: "portfolio-site".to_string(),
            description: "Personal site".to_string(),
            language: "TypeScript".to_string(),
        }
    }

    fn full_live() -> RepoInfo {
        RepoInfo {
            description: Some("Personal site, rebuilt".to_string()),
            html_url: Some("https://github.com/arhan/portfolio-site".to_string()),
            stargazers_count: Some(42),
            language: Some("Rust".to_string()),
            updated_at: Some(Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap()),
            fork: false,
        }
    }

    #[test]
    fn test_absent_live_data_falls_back_to_descriptor() {
        let merged = merge(&descriptor(), "arhan", None);
        assert_eq!(merged.display_name, "portfolio-site");
        assert_eq!(merged.url, "https://github.com/arhan/portfolio-site");
        assert_eq!(merged.description, "Personal site");
        assert_eq!(merged.language, "TypeScript");
        assert_eq!(merged.stars, 0);
        assert_eq!(merged.updated_at, None);
        assert!(!merged.live);
    }

    #[test]
    fn test_live_fields_override_descriptor() {
        let merged = merge(&descriptor(), "arhan", Some(&full_live()));
        assert_eq!(merged.description, "Personal site, rebuilt");
        assert_eq!(merged.language, "Rust");
        assert_eq!(merged.stars, 42);
        assert!(merged.updated_at.is_some());
        assert!(merged.live);
    }

    #[test]
    fn test_live_fields_override_independently() {
        // description missing must not stop stargazers_count from applying.
        let live = RepoInfo {
            description: None,
            ..full_live()
        };
        let merged = merge(&descriptor(), "arhan", Some(&live));
        assert_eq!(merged.description, "Personal site");
        assert_eq!(merged.stars, 42);
        assert_eq!(merged.language, "Rust");
    }

    #[test]
    fn test_live_without_star_count_defaults_to_zero() {
        let live = RepoInfo {
            stargazers_count: None,
            ..full_live()
        };
        assert_eq!(merge(&descriptor(), "arhan", Some(&live)).stars, 0);
    }

    #[test]
    fn test_display_name_home_owner_is_bare() {
        assert_eq!(display_name(&descriptor(), "arhan"), "portfolio-site");
        assert_eq!(display_name(&descriptor(), "ARHAN"), "portfolio-site");
    }

    #[test]
    fn test_display_name_foreign_owner_is_qualified() {
        assert_eq!(display_name(&descriptor(), "someone-else"), "arhan/portfolio-site");
    }

    #[test]
    fn test_merge_all_preserves_catalog_order_with_partial_results() {
        let catalog: Vec<RepoDescriptor> = (0..6)
            .map(|i| RepoDescriptor {
                owner: "arhan".to_string(),
                name: format!("repo-{i}"),
                description: format!("desc {i}"),
                language: "Rust".to_string(),
            })
            .collect();
        // Live fetch succeeded for 4 of 6 (indexes 1 and 4 failed).
        let live: Vec<Option<RepoInfo>> = (0..6)
            .map(|i| {
                if i == 1 || i == 4 {
                    None
                } else {
                    Some(RepoInfo {
                        stargazers_count: Some(i),
                        ..full_live()
                    })
                }
            })
            .collect();

        let merged = merge_all(&catalog, &live, "arhan");
        assert_eq!(merged.len(), 6);
        for (i, repo) in merged.iter().enumerate() {
            assert_eq!(repo.display_name, format!("repo-{i}"));
        }
        assert_eq!(merged[1].stars, 0);
        assert_eq!(merged[1].updated_at, None);
        assert!(!merged[1].live);
        assert_eq!(merged[4].stars, 0);
        assert!(merged[0].live);
        assert_eq!(merged[5].stars, 5);
    }

    #[test]
    fn test_merge_all_tolerates_short_live_list() {
        let catalog = vec![descriptor(), descriptor()];
        let merged = merge_all(&catalog, &[], "arhan");
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|r| !r.live));
    }
}
