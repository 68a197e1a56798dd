// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static SVG rendering of an assembled heatmap view.
//!
//! The output is a self-contained image: year heading, month labels over
//! their first-day week columns, Mon-Sun row labels, one 12px square per
//! grid position, and a `<title>` per in-year cell so hovering shows the
//! same detail text the interactive grid does.

use std::fmt::Write;

use crate::services::heatmap::{HeatmapView, DAY_LABELS};

const CELL: u32 = 12;
const GAP: u32 = 2;
const PADDING: u32 = 16;
const LABEL_LEFT: u32 = 36;
const LABEL_TOP: u32 = 20;

const BG_COLOR: &str = "#ffffff";
const FILLER_COLOR: &str = "#ffffff";
const LABEL_COLOR: &str = "#64748b";
const TEXT_COLOR: &str = "#1f2937";

/// Render a heatmap view as an SVG document.
pub fn render_svg(view: &HeatmapView) -> String {
    let width = view.weeks * (CELL + GAP) + PADDING * 2 + LABEL_LEFT;
    let height = 7 * (CELL + GAP) + PADDING * 2 + LABEL_TOP;
    let grid_x = PADDING + LABEL_LEFT;
    let grid_y = PADDING + LABEL_TOP;

    let mut svg = String::new();
    let _ = writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(svg, r#"<rect width="{width}" height="{height}" fill="{BG_COLOR}"/>"#);
    let _ = writeln!(
        svg,
        r#"<text x="{PADDING}" y="{}" font-size="12" fill="{TEXT_COLOR}" font-family="Arial, sans-serif">{}</text>"#,
        PADDING + 12,
        view.year
    );

    for label in &view.month_labels {
        let x = grid_x + label.week * (CELL + GAP);
        let _ = writeln!(
            svg,
            r#"<text x="{x}" y="{}" font-size="10" fill="{LABEL_COLOR}" font-family="Arial, sans-serif">{}</text>"#,
            PADDING + 12,
            label.month
        );
    }

    for (row, label) in DAY_LABELS.iter().enumerate() {
        let x = PADDING + LABEL_LEFT - 6;
        let y = grid_y + row as u32 * (CELL + GAP) + CELL - 2;
        let _ = writeln!(
            svg,
            r#"<text x="{x}" y="{y}" font-size="9" fill="{LABEL_COLOR}" font-family="Arial, sans-serif" text-anchor="end">{label}</text>"#
        );
    }

    let _ = writeln!(svg, r#"<g transform="translate({grid_x},{grid_y})">"#);

    for cell in &view.cells {
        let x = cell.week * (CELL + GAP);
        let y = cell.weekday * (CELL + GAP);
        if cell.in_year {
            let _ = writeln!(
                svg,
                r#"<rect x="{x}" y="{y}" width="{CELL}" height="{CELL}" fill="{}" stroke="{BG_COLOR}" stroke-width="1" data-date="{}"><title>{}</title></rect>"#,
                cell.color, cell.date, cell.title
            );
        } else {
            let _ = writeln!(
                svg,
                r#"<rect x="{x}" y="{y}" width="{CELL}" height="{CELL}" fill="{FILLER_COLOR}" stroke="{BG_COLOR}" stroke-width="1"/>"#
            );
        }
    }

    let _ = writeln!(svg, "</g>");
    let _ = writeln!(svg, "</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::feed::{DailyAggregate, DistanceUnit, ElevationUnit, Feed, Units};
    use crate::models::types;
    use crate::services::heatmap::ViewSelection;
    use crate::services::intensity::IntensityPolicy;
    use std::collections::BTreeMap;

    fn test_view() -> HeatmapView {
        let mut feed = Feed {
            units: Units {
                distance: DistanceUnit::Km,
                elevation: ElevationUnit::M,
            },
            types: vec!["Run".to_string()],
            years: vec![2023],
            generated_at: None,
            aggregates: BTreeMap::new(),
        };
        feed.aggregates
            .entry(2023)
            .or_default()
            .entry("Run".to_string())
            .or_default()
            .insert(
                "2023-06-15".parse().unwrap(),
                DailyAggregate {
                    count: 2,
                    distance: 10_000.0,
                    moving_time: 3_600.0,
                    elevation_gain: 50.0,
                    activity_ids: vec![1, 2],
                },
            );
        HeatmapView::build(
            &feed,
            2023,
            &ViewSelection::Single("Run"),
            IntensityPolicy::Binary,
        )
        .unwrap()
    }

    #[test]
    fn test_document_shape() {
        let view = test_view();
        let svg = render_svg(&view);

        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        // 53 weeks of 12px cells, 2px gaps, padding and the label gutter
        assert!(svg.contains(r#"width="810" height="150""#));
    }

    #[test]
    fn test_one_rect_per_grid_position() {
        let view = test_view();
        let svg = render_svg(&view);

        // One background rect plus one per cell
        let rects = svg.matches("<rect ").count();
        assert_eq!(rects, 1 + 53 * 7);
    }

    #[test]
    fn test_titles_only_on_in_year_cells() {
        let view = test_view();
        let svg = render_svg(&view);

        let titles = svg.matches("<title>").count();
        assert_eq!(titles, 365);
        assert!(svg.contains(r#"data-date="2023-06-15""#));
        assert!(svg.contains("2 workouts"));
        assert!(!svg.contains(r#"data-date="2022-12-26""#));
    }

    #[test]
    fn test_active_cell_uses_classifier_color() {
        let view = test_view();
        let svg = render_svg(&view);

        assert!(svg.contains(&format!(r#"fill="{}""#, types::accent_color("Run"))));
    }

    #[test]
    fn test_axis_labels() {
        let view = test_view();
        let svg = render_svg(&view);

        for month in ["Jan", "Jun", "Dec"] {
            assert!(svg.contains(&format!(">{month}</text>")));
        }
        for day in ["Mon", "Sun"] {
            assert!(svg.contains(&format!(">{day}</text>")));
        }
        assert!(svg.contains(">2023</text>"));
    }
}
