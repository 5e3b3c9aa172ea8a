//! Fixture data: two projects with their palettes
//!
//! Used by `palettes seed`, `serve --seed` and the router tests.

use super::store::{DbError, PaletteStore};
use crate::models::{Name, NewPalette, ProjectFilter};

struct PaletteFixture {
    name: &'static str,
    colors: [&'static str; 5],
}

struct ProjectFixture {
    name: &'static str,
    palettes: &'static [PaletteFixture],
}

const FIXTURES: &[ProjectFixture] = &[
    ProjectFixture {
        name: "project a",
        palettes: &[
            PaletteFixture {
                name: "palette i",
                colors: ["#ffffff", "#ff0000", "#fff000", "#000fff", "#0000ff"],
            },
            PaletteFixture {
                name: "palette j",
                colors: ["#aaaaaa", "#aa0000", "#aaa000", "#000aaa", "#0000aa"],
            },
        ],
    },
    ProjectFixture {
        name: "project b",
        palettes: &[
            PaletteFixture {
                name: "palette x",
                colors: ["#666666", "#660000", "#666000", "#000666", "#000066"],
            },
            PaletteFixture {
                name: "palette y",
                colors: ["#222222", "#220000", "#222000", "#000222", "#000022"],
            },
            PaletteFixture {
                name: "palette z",
                colors: ["#888888", "#880000", "#888000", "#000888", "#000088"],
            },
        ],
    },
];

/// Rows written by [`seed`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub projects: usize,
    pub palettes: usize,
}

/// Replace the store contents with the fixture projects and palettes.
///
/// Existing projects are removed through [`PaletteStore::delete_project`],
/// so their palettes go first.
pub async fn seed(store: &dyn PaletteStore) -> Result<SeedSummary, DbError> {
    for project in store.list_projects(&ProjectFilter::default()).await? {
        store.delete_project(project.id).await?;
    }

    let mut summary = SeedSummary::default();
    for fixture in FIXTURES {
        let project_id = store
            .insert_project(&Name::trusted(fixture.name))
            .await?;
        summary.projects += 1;

        for palette in fixture.palettes {
            let [color1, color2, color3, color4, color5] = palette.colors.map(str::to_owned);
            store
                .insert_palette(&NewPalette {
                    name: palette.name.to_owned(),
                    color1,
                    color2,
                    color3,
                    color4,
                    color5,
                    project_id,
                })
                .await?;
            summary.palettes += 1;
        }
    }

    tracing::info!(
        projects = summary.projects,
        palettes = summary.palettes,
        "seed complete"
    );
    Ok(summary)
}
