//! The render-prop consumer and the component wrapper.
#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_container::prelude::*;
use pretty_assertions::assert_eq;
use std::{cell::Cell, sync::LazyLock};

#[derive(Clone, Debug, PartialEq)]
struct Theme {
    name: &'static str,
}

fn theme(initial: Option<&'static str>) -> Theme {
    Theme {
        name: initial.unwrap_or("light"),
    }
}

static THEME: LazyLock<Container<&'static str, Theme>> =
    LazyLock::new(|| Container::new("Theme", theme));

thread_local! {
    static RENDERED: Cell<bool> = const { Cell::new(false) };
}

fn ThemeName() -> Element {
    let theme = THEME.use_container();

    rsx! {
        em { "{theme.name}" }
    }
}

#[test]
fn consumer_renders_the_provided_value() {
    fn app() -> Element {
        rsx! {
            ContainerProvider::<&'static str, Theme> { container: *THEME, initial_state: "dark",
                ContainerConsumer::<&'static str, Theme> {
                    container: *THEME,
                    render: move |theme: Theme| rsx! {
                        span { "{theme.name}" }
                    },
                }
            }
        }
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    assert_eq!(dioxus_ssr::render(&dom), "<span>dark</span>");
}

#[test]
fn consumer_never_renders_without_a_provider() {
    fn app() -> Element {
        rsx! {
            ContainerConsumer::<&'static str, Theme> {
                container: *THEME,
                render: move |theme: Theme| {
                    RENDERED.with(|rendered| rendered.set(true));
                    rsx! {
                        span { "{theme.name}" }
                    }
                },
            }
        }
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    assert!(!RENDERED.with(Cell::get));
    assert!(!dioxus_ssr::render(&dom).contains("<span>"));
}

#[derive(Props, Clone, PartialEq)]
struct PanelProps {
    label: String,
}

fn Panel(props: PanelProps) -> Element {
    let theme = THEME.use_container();

    rsx! {
        span { "{props.label} {theme.name}" }
        ThemeName {}
    }
}

#[test]
fn wrapped_component_gets_its_own_instance() {
    let wrapped = THEME.with_container(Panel);

    let mut dom = VirtualDom::new_with_props(
        wrapped,
        PanelProps {
            label: "settings".to_string(),
        },
    );
    dom.rebuild_in_place();

    assert_eq!(
        dioxus_ssr::render(&dom),
        "<span>settings light</span><em>light</em>"
    );
}
