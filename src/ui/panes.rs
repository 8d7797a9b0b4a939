//! Rendering logic for the structure pane, metrics pane, and status bar

use crate::dataset::{
    ArrayElement, ElementStatus, GraphEdge, GraphNode, GraphStatus, NodeStatus, TreeNode,
};
use crate::registry::{AlgorithmId, Family};
use crate::snapshot::RunMetrics;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap,
    },
    Frame,
};

fn element_color(status: ElementStatus) -> Color {
    match status {
        ElementStatus::Default => DEFAULT_THEME.primary,
        ElementStatus::Comparing => DEFAULT_THEME.error,
        ElementStatus::Sorted => DEFAULT_THEME.success,
        ElementStatus::Pivot => DEFAULT_THEME.pivot,
    }
}

fn tree_color(status: NodeStatus) -> Color {
    match status {
        NodeStatus::Default => DEFAULT_THEME.primary,
        NodeStatus::Visiting => DEFAULT_THEME.secondary,
        NodeStatus::Visited => DEFAULT_THEME.success,
    }
}

fn graph_color(status: GraphStatus) -> Color {
    match status {
        GraphStatus::Unvisited => DEFAULT_THEME.comment,
        GraphStatus::Visiting => DEFAULT_THEME.secondary,
        GraphStatus::Visited => DEFAULT_THEME.success,
    }
}

/// Render the working array as a bar chart, one bar per slot, colored by
/// status.
pub fn render_array_pane(frame: &mut Frame, area: Rect, elements: &[ArrayElement]) {
    let inner_width = area.width.saturating_sub(2);
    let count = elements.len().max(1) as u16;
    // Widest bars that still fit with a one-cell gap.
    let bar_width = (inner_width / count).saturating_sub(1).max(1);

    let bars: Vec<Bar> = elements
        .iter()
        .map(|element| {
            Bar::default()
                .value(element.value as u64)
                .text_value(String::new())
                .style(Style::default().fg(element_color(element.status)))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
                .title(" Array "),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(100);

    frame.render_widget(chart, area);
}

/// Render the tree sideways (right subtree above, left below, deeper nodes
/// indented further) with the traversal order underneath.
pub fn render_tree_pane(frame: &mut Frame, area: Rect, root: &TreeNode, order: &[i32]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let mut lines = Vec::new();
    tree_lines(root, 0, &mut lines);
    let tree = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
            .title(" Binary Search Tree "),
    );
    frame.render_widget(tree, rows[0]);

    let mut order_spans = vec![Span::styled(
        "Visited: ",
        Style::default().fg(DEFAULT_THEME.comment),
    )];
    for (i, value) in order.iter().enumerate() {
        if i > 0 {
            order_spans.push(Span::styled(
                " → ",
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
        order_spans.push(Span::styled(
            value.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ));
    }
    let order_paragraph = Paragraph::new(Line::from(order_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
            .title(" Traversal Order "),
    );
    frame.render_widget(order_paragraph, rows[1]);
}

fn tree_lines(node: &TreeNode, depth: usize, lines: &mut Vec<Line<'static>>) {
    if let Some(right) = &node.right {
        tree_lines(right, depth + 1, lines);
    }
    let style = Style::default().fg(tree_color(node.status));
    lines.push(Line::from(Span::styled(
        format!("{}{}", "      ".repeat(depth), node.value),
        style,
    )));
    if let Some(left) = &node.left {
        tree_lines(left, depth + 1, lines);
    }
}

/// Render the graph on a canvas: edges with weights first, nodes on top.
/// Distances are printed next to the nodes for shortest-path runs.
pub fn render_graph_pane(
    frame: &mut Frame,
    area: Rect,
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    show_distances: bool,
) {
    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
                .title(" Graph "),
        )
        .x_bounds([50.0, 450.0])
        .y_bounds([50.0, 300.0])
        .paint(|ctx| {
            // Layout y grows downward, canvas y grows upward.
            let flip = |y: f64| 350.0 - y;

            for edge in edges {
                let from = &nodes[edge.from as usize];
                let to = &nodes[edge.to as usize];
                ctx.draw(&CanvasLine {
                    x1: from.x,
                    y1: flip(from.y),
                    x2: to.x,
                    y2: flip(to.y),
                    color: DEFAULT_THEME.comment,
                });
                ctx.print(
                    (from.x + to.x) / 2.0,
                    flip((from.y + to.y) / 2.0),
                    Line::from(Span::styled(
                        edge.weight.to_string(),
                        Style::default().fg(DEFAULT_THEME.fg),
                    )),
                );
            }

            ctx.layer();

            for node in nodes {
                let label = if show_distances {
                    if node.distance.is_infinite() {
                        format!("({}) ∞", node.id)
                    } else {
                        format!("({}) {}", node.id, node.distance as i64)
                    }
                } else {
                    format!("({})", node.id)
                };
                ctx.print(
                    node.x,
                    flip(node.y),
                    Line::from(Span::styled(
                        label,
                        Style::default()
                            .fg(graph_color(node.status))
                            .add_modifier(Modifier::BOLD),
                    )),
                );
            }
        });

    frame.render_widget(canvas, area);
}

/// Render the algorithm card and the run counters.
pub fn render_metrics_pane(
    frame: &mut Frame,
    area: Rect,
    algorithm: AlgorithmId,
    metrics: &RunMetrics,
) {
    let info = algorithm.info();

    let counter_label = match info.family {
        Family::Sorting => "Comparisons",
        Family::Tree | Family::Graph => "Visited",
    };

    let mut lines = vec![
        Line::from(Span::styled(
            info.name,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Family: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                info.family.to_string(),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]),
        Line::from(vec![
            Span::styled("Complexity: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                info.complexity,
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            info.description,
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{}: ", counter_label),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                metrics.comparisons.to_string(),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]),
    ];

    if info.family == Family::Sorting {
        lines.push(Line::from(vec![
            Span::styled("Swaps: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                metrics.swaps.to_string(),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("Time: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!("{} ms", metrics.elapsed_ms),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ]));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
            .title(" Algorithm "),
    );
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    current_step: usize,
    total_steps: usize,
    is_playing: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: step info and status message
    let step_text = if total_steps > 0 {
        format!(" Step {}/{} ", current_step, total_steps)
    } else {
        " Ready ".to_string()
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⇥ ", key_style),
        Span::styled(" algo ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" r ", key_style),
        Span::styled(" reset ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" [/] ", key_style),
        Span::styled(" speed ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let is_at_start = current_step == 0;
    let is_at_end = total_steps > 0 && current_step >= total_steps;

    if is_playing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ▶ PLAYING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_at_end {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " END ",
            Style::default()
                .bg(DEFAULT_THEME.error)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_at_start {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " START ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
