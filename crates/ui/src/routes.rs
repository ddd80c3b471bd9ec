use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::QuestionsView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuestionsView)] Questions {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { "Coding Interview Patterns" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
