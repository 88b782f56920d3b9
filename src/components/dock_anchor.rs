use dioxus::prelude::*;

use crate::app::PlayerHandle;
use crate::core::slot::MountPoint;

/// Covers the page placeholder; clicks pass through to it. The surface
/// re-enables pointer events for itself once it is moved in.
const ANCHOR_STYLE: &str = "position: absolute; inset: 0; pointer-events: none;";

/// A container the lesson video can dock into. Registers itself with the
/// surface manager once it is in the document and unregisters on unmount.
#[component]
pub fn DockAnchor(id: String) -> Element {
    let mut manager = use_context::<PlayerHandle>();
    let mount = use_hook(|| MountPoint::new(id.clone()));

    use_drop({
        let mount = mount.clone();
        move || manager.write().anchor_unmounted(&mount)
    });

    rsx! {
        div {
            id: "{id}",
            "data-dock-anchor": "true",
            style: ANCHOR_STYLE,
            onmounted: move |_| manager.write().anchor_mounted(mount.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_does_not_swallow_placeholder_clicks() {
        assert!(ANCHOR_STYLE.contains("pointer-events: none"));
        assert!(ANCHOR_STYLE.contains("position: absolute"));
    }
}
