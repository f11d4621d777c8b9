use std::sync::Arc;

use iced::alignment::Horizontal;
use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{application, Background, Border, Color, Element, Length, Shadow, Size, Task, Theme};

use crate::domains::message::{ChatOutcome, Role};
use crate::interfaces::services::ChatBackend;
use crate::session::{ChatSession, RenderBlock};

const APP_TITLE: &str = "Mastra チャットアプリ";
const INPUT_PLACEHOLDER: &str = "メッセージを入力...";
const SEND_LABEL: &str = "送信";
const BUBBLE_MAX_WIDTH: f32 = 560.0;

#[derive(Clone)]
pub struct ChatUiLaunchConfig {
    pub backend: Arc<dyn ChatBackend>,
}

struct ChatApp {
    session: ChatSession,
    backend: Arc<dyn ChatBackend>,
}

#[derive(Clone, Debug)]
enum Message {
    InputChanged(String),
    SendPressed,
    ResponseReady(ChatOutcome),
}

pub fn launch_ui(config: ChatUiLaunchConfig) -> iced::Result {
    application(
        move || {
            let state = ChatApp {
                session: ChatSession::new(),
                backend: config.backend.clone(),
            };
            (state, Task::none())
        },
        update,
        view,
    )
    .title(app_title)
    .theme(app_theme)
    .window(iced::window::Settings {
        size: Size::new(720.0, 860.0),
        min_size: Some(Size::new(420.0, 520.0)),
        ..Default::default()
    })
    .run()
}

fn app_title(_state: &ChatApp) -> String {
    APP_TITLE.to_string()
}

fn app_theme(_state: &ChatApp) -> Theme {
    Theme::Light
}

fn update(state: &mut ChatApp, message: Message) -> Task<Message> {
    match message {
        Message::InputChanged(value) => {
            state.session.set_input(value);
            Task::none()
        }
        Message::SendPressed => {
            let Some(history) = state.session.begin_submit() else {
                return Task::none();
            };
            let backend = state.backend.clone();
            Task::perform(
                async move { backend.send_message(history).await },
                Message::ResponseReady,
            )
        }
        Message::ResponseReady(outcome) => {
            state.session.finish_submit(outcome);
            Task::none()
        }
    }
}

fn view(state: &ChatApp) -> Element<'_, Message> {
    let list = state
        .session
        .blocks()
        .into_iter()
        .fold(column!().spacing(16).width(Length::Fill), |col, block| {
            col.push(view_block(block))
        });

    let mut input = text_input(INPUT_PLACEHOLDER, state.session.input())
        .padding(12)
        .width(Length::Fill);
    if !state.session.is_loading() {
        input = input
            .on_input(Message::InputChanged)
            .on_submit(Message::SendPressed);
    }

    let composer = row![
        input,
        button(text(SEND_LABEL))
            .padding([12, 24])
            .style(iced::widget::button::primary)
            .on_press_maybe(state.session.can_submit().then_some(Message::SendPressed)),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    let content = column![
        text(APP_TITLE).size(24),
        scrollable(container(list).padding([0, 8]).width(Length::Fill))
            .height(Length::Fill)
            .width(Length::Fill)
            .anchor_bottom(),
        composer
    ]
    .spacing(16)
    .padding(16)
    .height(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn view_block<'a>(block: RenderBlock) -> Element<'a, Message> {
    let bubble = container(column![text(block.label).size(13), text(block.text)].spacing(4))
        .padding(16)
        .max_width(BUBBLE_MAX_WIDTH)
        .style(match block.role {
            Role::User => user_bubble,
            Role::Assistant => assistant_bubble,
        });

    let align = match block.role {
        Role::User => Horizontal::Right,
        Role::Assistant => Horizontal::Left,
    };

    container(bubble).width(Length::Fill).align_x(align).into()
}

fn user_bubble(_theme: &Theme) -> iced::widget::container::Style {
    iced::widget::container::Style {
        text_color: Some(Color::WHITE),
        background: Some(Background::Color(Color::from_rgb8(0x3b, 0x82, 0xf6))),
        border: Border {
            radius: 8.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

fn assistant_bubble(_theme: &Theme) -> iced::widget::container::Style {
    iced::widget::container::Style {
        text_color: Some(Color::from_rgb8(0x11, 0x18, 0x27)),
        background: Some(Background::Color(Color::from_rgb8(0xe5, 0xe7, 0xeb))),
        border: Border {
            radius: 8.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        snap: false,
    }
}
