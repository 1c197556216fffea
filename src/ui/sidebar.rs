use fltk::{
    app::Sender,
    button::RadioRoundButton,
    enums::{Align, Color, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
};

use crate::app::generator::Operator;
use crate::app::messages::Message;

pub const SIDEBAR_WIDTH: i32 = 180;

/// Operator selection column. One radio button per operator; selecting one
/// regenerates every page with that operator.
pub struct Sidebar {
    pub flex: Flex,
    buttons: Vec<(Operator, RadioRoundButton)>,
}

impl Sidebar {
    pub fn new(sender: &Sender<Message>, current: Operator) -> Self {
        let mut flex = Flex::new(0, 0, SIDEBAR_WIDTH, 0, None);
        flex.set_type(fltk::group::FlexType::Column);
        flex.set_margin(8);

        let mut title = Frame::default().with_label("Templates");
        title.set_label_font(Font::HelveticaBold);
        title.set_label_size(14);
        title.set_align(Align::Left | Align::Inside);
        flex.fixed(&title, 28);

        let mut buttons = Vec::new();
        for &op in Operator::all() {
            let mut btn = RadioRoundButton::default()
                .with_label(&format!("{}  {}", op.symbol(), op.display_name()));
            if op == current {
                btn.set_value(true);
            }
            let s = *sender;
            btn.set_callback(move |_| s.send(Message::SetOperator(op)));
            flex.fixed(&btn, 30);
            buttons.push((op, btn));
        }

        let mut hint = Frame::default().with_label("Changing the operator\nregenerates every page.");
        hint.set_label_size(11);
        hint.set_label_color(Color::from_rgb(100, 100, 100));
        hint.set_align(Align::Left | Align::Inside | Align::Top);
        flex.end();

        Self { flex, buttons }
    }

    /// Sync the radio group with the worksheet's operator.
    pub fn select(&mut self, operator: Operator) {
        for (op, btn) in &mut self.buttons {
            btn.set_value(*op == operator);
        }
    }
}
