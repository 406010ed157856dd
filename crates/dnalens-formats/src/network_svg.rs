use dnalens_core::layout::NetworkLayout;
use dnalens_core::Relationship;
use svg::node::element::{Circle, Line, Rectangle, Text};
use svg::Document;

const CENTER_RADIUS: f64 = 30.0;
const GENE_RADIUS: f64 = 20.0;
const FONT: &str = "Helvetica, Arial, sans-serif";

fn relationship_color(relationship: Relationship) -> &'static str {
    match relationship {
        Relationship::Activation => "#22c55e",
        Relationship::Repression => "#ef4444",
    }
}

/// Truncate long labels so they stay inside the node
fn node_label(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        name.to_string()
    } else {
        let head: String = name.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

/// Render the gene-interaction diagram as a standalone SVG document
pub fn render_network_svg(layout: &NetworkLayout) -> String {
    let cfg = &layout.config;
    let center = cfg.center;

    let mut doc = Document::new()
        .set("viewBox", (0, 0, cfg.width, cfg.height))
        .set("width", cfg.width)
        .set("height", cfg.height);

    doc = doc.add(
        Rectangle::new()
            .set("width", cfg.width)
            .set("height", cfg.height)
            .set("fill", "#ffffff"),
    );

    for gene in &layout.genes {
        let mut edge = Line::new()
            .set("x1", center.x)
            .set("y1", center.y)
            .set("x2", gene.position.x)
            .set("y2", gene.position.y)
            .set("stroke", relationship_color(gene.relationship))
            .set("stroke-width", 1.0 + gene.strength.clamp(0.0, 1.0) * 3.0)
            .set("stroke-opacity", 0.7);
        if gene.relationship == Relationship::Repression {
            edge = edge.set("stroke-dasharray", "5,5");
        }
        doc = doc.add(edge);
    }

    doc = doc
        .add(
            Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", CENTER_RADIUS)
                .set("fill", "#1e40af"),
        )
        .add(
            Text::new(node_label(&layout.center_label, 14))
                .set("x", center.x)
                .set("y", center.y + 4.0)
                .set("text-anchor", "middle")
                .set("font-family", FONT)
                .set("font-size", 9)
                .set("fill", "#ffffff"),
        );

    for gene in &layout.genes {
        let color = relationship_color(gene.relationship);
        doc = doc
            .add(
                Circle::new()
                    .set("cx", gene.position.x)
                    .set("cy", gene.position.y)
                    .set("r", GENE_RADIUS)
                    .set("fill", "#f8fafc")
                    .set("stroke", color)
                    .set("stroke-width", 2),
            )
            .add(
                Text::new(node_label(&gene.name, 8))
                    .set("x", gene.position.x)
                    .set("y", gene.position.y + 4.0)
                    .set("text-anchor", "middle")
                    .set("font-family", FONT)
                    .set("font-size", 10)
                    .set("font-weight", "bold")
                    .set("fill", "#1e293b"),
            )
            .add(
                Text::new(format!("{}%", (gene.strength.clamp(0.0, 1.0) * 100.0).round()))
                    .set("x", gene.position.x)
                    .set("y", gene.position.y + GENE_RADIUS + 12.0)
                    .set("text-anchor", "middle")
                    .set("font-family", FONT)
                    .set("font-size", 8)
                    .set("fill", color),
            );
    }

    doc.to_string()
}
