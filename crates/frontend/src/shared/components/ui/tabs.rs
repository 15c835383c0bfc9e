//! Tab-group primitive: `TabGroup` + `TabList` + `TabTrigger`.
//!
//! The group owns nothing but wiring: the active value comes in as a signal,
//! activation goes out through a callback, and keyboard traversal
//! (ArrowLeft/ArrowRight on the tab list) walks the triggers in registration
//! order. Visual treatment of a trigger is the caller's business, supplied
//! via the `class` prop.

use leptos::ev;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct TabGroupContext {
    /// Currently active tab value, owned by the component hosting the group.
    pub active: Signal<String>,
    /// Activation channel back to the owner. Used by keyboard traversal.
    pub on_activate: Callback<String>,
    order: RwSignal<Vec<String>>,
}

impl TabGroupContext {
    fn register(&self, value: String) {
        self.order.update(|order| {
            if !order.contains(&value) {
                order.push(value);
            }
        });
    }

    fn deregister(&self, value: &str) {
        self.order.update(|order| order.retain(|v| v != value));
    }

    fn step(&self, delta: isize) -> Option<String> {
        let order = self.order.get_untracked();
        let active = self.active.get_untracked();
        next_value(&order, &active, delta)
    }
}

/// Circular neighbour of `current` in `order`, `delta` positions away.
/// `None` when the list is empty or `current` is not registered.
fn next_value(order: &[String], current: &str, delta: isize) -> Option<String> {
    let idx = order.iter().position(|v| v == current)?;
    let len = order.len() as isize;
    let next = (idx as isize + delta).rem_euclid(len) as usize;
    Some(order[next].clone())
}

/// Root of a tab group. Provides `TabGroupContext` to nested `TabList` and
/// `TabTrigger` components. Selection state stays with the caller.
#[component]
pub fn TabGroup(
    /// Active tab value (reactive)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the value to activate (keyboard traversal)
    on_change: Callback<String>,
    children: Children,
) -> impl IntoView {
    provide_context(TabGroupContext {
        active: value,
        on_activate: on_change,
        order: RwSignal::new(vec![]),
    });

    view! {
        <div class="tab-group">
            {children()}
        </div>
    }
}

/// Horizontal strip of triggers. Owns ArrowLeft/ArrowRight traversal so that
/// individual triggers only have to handle clicks.
#[component]
pub fn TabList(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<TabGroupContext>()
        .expect("TabGroupContext context not found");

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let delta = match ev.key().as_str() {
            "ArrowRight" => 1,
            "ArrowLeft" => -1,
            _ => return,
        };
        ev.prevent_default();
        if let Some(next) = ctx.step(delta) {
            ctx.on_activate.run(next);
        }
    };

    view! {
        <div role="tablist" class="tab-list" on:keydown=on_keydown>
            {children()}
        </div>
    }
}

/// One tab header. Registers its value with the enclosing group for keyboard
/// traversal and reflects the active value through `aria-selected` and roving
/// tabindex. Click handling is forwarded untouched to `on_click`.
#[component]
pub fn TabTrigger(
    /// Value this trigger represents within the group
    #[prop(into)]
    value: String,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let ctx = leptos::context::use_context::<TabGroupContext>()
        .expect("TabGroupContext context not found");

    ctx.register(value.clone());
    let value_for_cleanup = value.clone();
    on_cleanup(move || ctx.deregister(&value_for_cleanup));

    let value_for_selected = value.clone();
    let is_selected = Memo::new(move |_| ctx.active.get() == value_for_selected);

    view! {
        <button
            type="button"
            role="tab"
            aria-selected=move || if is_selected.get() { "true" } else { "false" }
            tabindex=move || if is_selected.get() { "0" } else { "-1" }
            class=move || class.get().unwrap_or_default()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_next_value_steps_right() {
        let order = order(&["params", "headers", "search-params"]);
        assert_eq!(next_value(&order, "params", 1).as_deref(), Some("headers"));
        assert_eq!(
            next_value(&order, "headers", 1).as_deref(),
            Some("search-params")
        );
    }

    #[test]
    fn test_next_value_wraps_around() {
        let order = order(&["params", "headers", "search-params"]);
        assert_eq!(
            next_value(&order, "search-params", 1).as_deref(),
            Some("params")
        );
        assert_eq!(
            next_value(&order, "params", -1).as_deref(),
            Some("search-params")
        );
    }

    #[test]
    fn test_next_value_unknown_current() {
        let order = order(&["params", "headers"]);
        assert_eq!(next_value(&order, "missing", 1), None);
        assert_eq!(next_value(&[], "params", 1), None);
    }
}
