use ratatui::Frame;

use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::greeting::draw_greeting;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::lookup::draw_lookup;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, trainer, lookup, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(app.trainer_name()), header);
    draw_greeting(frame, app.greeting(), app.focus() == Focus::Trainer, trainer);
    draw_lookup(
        frame,
        app.lookup_input(),
        app.lookup(),
        app.focus() == Focus::Lookup,
        lookup,
    );
    frame.render_widget(Footer::new().widget(), footer);
}
