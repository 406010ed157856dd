use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::analysis::{Relationship, TargetGene};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Canvas geometry for the gene-interaction diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            center: Point { x: 200.0, y: 150.0 },
            radius: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneNode {
    pub name: String,
    pub relationship: Relationship,
    pub strength: f64,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkLayout {
    pub config: LayoutConfig,
    pub center_label: String,
    pub genes: Vec<GeneNode>,
}

/// `n` points evenly spaced on the configured circle, the first one at the top
pub fn satellite_positions(n: usize, config: &LayoutConfig) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let angle = (i as f64 * 2.0 * PI) / n as f64 - PI / 2.0;
            Point {
                x: config.center.x + config.radius * angle.cos(),
                y: config.center.y + config.radius * angle.sin(),
            }
        })
        .collect()
}

/// Place the analysed sequence at the centre and its target genes around it
pub fn circular_layout(
    center_label: impl Into<String>,
    genes: &[TargetGene],
    config: &LayoutConfig,
) -> NetworkLayout {
    let positions = satellite_positions(genes.len(), config);

    NetworkLayout {
        config: *config,
        center_label: center_label.into(),
        genes: genes
            .iter()
            .zip(positions)
            .map(|(gene, position)| GeneNode {
                name: gene.name.clone(),
                relationship: gene.relationship,
                strength: gene.strength,
                position,
            })
            .collect(),
    }
}
