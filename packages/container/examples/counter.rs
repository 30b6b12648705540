//! Two counters built from the same hook: an outer one, and a nested one that shadows it.
//!
//! Run with `RUST_LOG=trace` to see the providers being mounted.
#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_container::prelude::*;
use std::sync::LazyLock;

#[derive(Clone, Copy, PartialEq)]
struct Counter {
    count: Signal<i32>,
}

fn use_counter(initial: Option<i32>) -> Counter {
    Counter {
        count: use_signal(|| initial.unwrap_or_default()),
    }
}

static COUNTER: LazyLock<Container<i32, Counter>> =
    LazyLock::new(|| Container::new("Counter", use_counter));

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut dom = VirtualDom::new(App);
    dom.rebuild_in_place();

    println!("{}", dioxus_ssr::render(&dom));
}

fn App() -> Element {
    rsx! {
        ContainerProvider::<i32, Counter> { container: *COUNTER,
            CounterDisplay {}
            ContainerProvider::<i32, Counter> { container: *COUNTER, initial_state: 5,
                div {
                    div { CounterDisplay {} }
                }
            }
        }
    }
}

fn CounterDisplay() -> Element {
    let mut counter = COUNTER.use_container();

    rsx! {
        div {
            button { onclick: move |_| counter.count -= 1, "-" }
            span { "{counter.count}" }
            button { onclick: move |_| counter.count += 1, "+" }
        }
    }
}
