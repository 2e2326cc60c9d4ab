/// Diagnostic tool to verify the data → tree → layout pipeline
use repomap_rs::data::{DataSource, FileSource};
use repomap_rs::layout::{compute_layout, LayoutConfig};
use repomap_rs::tree;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("repomap_rs=debug".parse().unwrap()),
        )
        .init();

    let data_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("repomap-data.json"));

    println!("=== DIAGNOSTIC: Data → Tree → Layout Pipeline ===");
    println!("Loading: {}", data_path.display());

    let raw = FileSource::new(data_path).load()?;
    let raw = tree::collapse_root(raw);
    let tree = tree::build_tree(&raw);

    let root = tree.get(tree.root);
    println!("\n[1] Tree built: {} nodes", tree.len());
    println!(
        "    Root: '{}' (weight={:.0}, direct children={})",
        root.label,
        root.subtree_weight,
        root.children.len()
    );

    println!("\n[2] Top 10 children of root by weight:");
    let mut root_children: Vec<_> = tree.children(tree.root).to_vec();
    root_children.sort_by(|a, b| {
        tree.get(*b)
            .subtree_weight
            .total_cmp(&tree.get(*a).subtree_weight)
    });
    for (i, child_id) in root_children.iter().take(10).enumerate() {
        let child = tree.get(*child_id);
        println!(
            "    [{}] '{}' - {:.0} (branch={}, children={})",
            i,
            child.label,
            child.subtree_weight,
            child.is_branch(),
            child.children.len()
        );
    }

    let config = LayoutConfig::default();
    let layout = compute_layout(&tree, tree.root, 1920.0, 1080.0, &config);
    println!("\n[3] Layout computed: {} rectangles", layout.rects.len());

    println!("\n[4] Top 10 largest rectangles by area:");
    let mut sorted_rects = layout.rects.clone();
    sorted_rects.sort_by(|a, b| (b.w * b.h).total_cmp(&(a.w * a.h)));
    for (i, rect) in sorted_rects.iter().skip(1).take(10).enumerate() {
        let node = tree.get(rect.node);
        println!(
            "    [{}] '{}' - {:.1}x{:.1} ({:.0}px²) at ({:.1}, {:.1}) depth {}",
            i,
            node.label,
            rect.w,
            rect.h,
            rect.w * rect.h,
            rect.x,
            rect.y,
            rect.depth
        );
    }

    println!("\n[5] Checking coverage:");
    let viewport_area = 1920.0_f32 * 1080.0;
    let first_level_area: f32 = layout
        .rects
        .iter()
        .filter(|r| r.depth == 1)
        .map(|r| r.w * r.h)
        .sum();
    println!("    First-level rect area: {:.0}px²", first_level_area);
    println!("    Viewport area:         {:.0}px²", viewport_area);
    println!(
        "    Coverage: {:.1}%",
        (first_level_area / viewport_area) * 100.0
    );

    let min_label_area = (viewport_area * 0.003).max(8_000.0);
    let labeled_count = layout
        .rects
        .iter()
        .filter(|r| r.w * r.h >= min_label_area && r.w >= 70.0 && r.h >= 20.0 && r.depth <= 5)
        .count();
    println!(
        "\n[6] Label candidates: {} rects (out of {})",
        labeled_count,
        layout.rects.len()
    );

    Ok(())
}
