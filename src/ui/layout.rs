use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the screen into header, the two exercise panes, and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    (rows[0], panes[0], panes[1], rows[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_tile_the_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 30,
        };
        let (header, trainer, lookup, footer) = layout_regions(area);

        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(trainer.height, 24);
        assert_eq!(lookup.height, 24);
        assert_eq!(trainer.width + lookup.width, 100);
        assert_eq!(footer.y, 27);
    }
}
