use learning_path::{LearningMap, Status};
use std::fmt::Write;

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Locked => "locked",
        Status::Available => "available",
        Status::Completed => "completed",
    }
}

/// Plain text listing of a resolved map
pub fn render(map: &LearningMap, current: Option<&str>) -> String {
    let current = map.current(current).map(|n| n.id.clone());
    let mut out = String::new();

    // Writing to a String can't fail
    let _ = writeln!(
        out,
        "{}: {}/{} modules ({}%)",
        map.title,
        map.progress.completed,
        map.progress.total,
        map.progress.rounded_percent()
    );

    for node in &map.nodes {
        let marker = if Some(&node.id) == current.as_ref() {
            '*'
        } else {
            ' '
        };
        let _ = writeln!(
            out,
            "{marker} [tier {}] {:<4} {:<20} {:<11} ({:5.1}, {:5.1}) {}",
            node.tier,
            node.id,
            node.title,
            node.kind,
            node.position.x,
            node.position.y,
            status_label(node.status)
        );
    }

    if !map.connections.is_empty() {
        let _ = writeln!(out, "connections:");
        for connection in &map.connections {
            let style = if connection.completed { "solid" } else { "dashed" };
            let _ = writeln!(out, "  {} -> {} {style}", connection.from, connection.to);
        }
    }

    out
}
