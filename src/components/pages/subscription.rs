use dioxus::prelude::*;

use super::{card_style, secondary_button_style, PageHeader};
use crate::constants::*;

#[component]
pub fn SubscriptionPage() -> Element {
    let mut confirming = use_signal(|| false);
    let mut cancelled = use_signal(|| false);
    let card = card_style();
    let secondary = secondary_button_style();

    let (plan_state, plan_color) = if cancelled() {
        ("Cancelled · access until the end of the billing period", ACCENT_WARNING)
    } else {
        ("Active · renews monthly", ACCENT_SUCCESS)
    };

    rsx! {
        PageHeader {
            title: "Subscription",
            subtitle: "Your plan and billing.",
        }
        div {
            style: "{card}",
            div { style: "font-size: 15px; font-weight: 600; margin-bottom: 4px;", "All-access monthly" }
            div { style: "font-size: 12px; color: {plan_color}; margin-bottom: 16px;", "{plan_state}" }
            if !cancelled() {
                if confirming() {
                    div {
                        style: "display: flex; gap: 8px; align-items: center; font-size: 12px; color: {TEXT_SECONDARY};",
                        span { "Cancel your subscription?" }
                        button {
                            style: "{secondary} color: {ACCENT_WARNING};",
                            onclick: move |_| {
                                cancelled.set(true);
                                confirming.set(false);
                            },
                            "Yes, cancel"
                        }
                        button {
                            style: "{secondary}",
                            onclick: move |_| confirming.set(false),
                            "Keep plan"
                        }
                    }
                } else {
                    button {
                        style: "{secondary}",
                        onclick: move |_| confirming.set(true),
                        "Cancel subscription"
                    }
                }
            }
        }
    }
}
