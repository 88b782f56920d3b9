//! Shared UI constants such as colors, element ids, and bridge scripts.

pub const BG_DEEPEST: &str = "#09090b";
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_PRIMARY: &str = "#3b82f6";
pub const ACCENT_WARNING: &str = "#f97316";
pub const ACCENT_SUCCESS: &str = "#22c55e";

// DOM ids shared between the views and the bridge scripts.
pub const LESSON_DOCK_ID: &str = "lesson-video-anchor";
pub const FLOATING_MOUNT_ID: &str = "floating-video-mount";
pub const PARKING_MOUNT_ID: &str = "media-parking";
pub const MEDIA_SURFACE_ID: &str = "lesson-media-surface";
pub const MEDIA_VIDEO_ID: &str = "lesson-media-video";
pub const CONTENT_SCROLL_ID: &str = "page-scroll-host";

pub const DEFAULT_VIDEO_SRC: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

pub const SEEK_STEP_SECONDS: f64 = 5.0;
pub const BRIDGE_RETRY_MS: u64 = 100;
pub const TITLE_BAR_HEIGHT: f64 = 40.0;
pub const STATUS_BAR_HEIGHT: f64 = 22.0;

/// Drives the `<video>` element. Receives `attach`/`detach`/`play`/`pause`/
/// `mute`/`seek` commands and sends native events tagged with the session id.
pub const MEDIA_BRIDGE_SCRIPT: &str = r#"
const videoId = "lesson-media-video";
const forwarded = ["play", "pause", "ended", "timeupdate", "durationchange", "loadedmetadata"];
let video = null;
let session = null;

function finite(value) {
    return Number.isFinite(value) ? value : 0;
}

function emit(kind, extra) {
    if (!session) {
        return;
    }
    dioxus.send(Object.assign({ element: session, kind: kind }, extra || {}));
}

function onEvent(event) {
    switch (event.type) {
        case "play":
            emit("play");
            break;
        case "pause":
            emit("pause");
            break;
        case "ended":
            emit("ended");
            break;
        case "timeupdate":
            emit("time_update", { value: finite(video.currentTime) });
            break;
        case "durationchange":
        case "loadedmetadata":
            emit("duration_change", { value: finite(video.duration) });
            break;
    }
}

function bind() {
    if (!session) {
        return;
    }
    const next = document.getElementById(videoId);
    if (!next) {
        setTimeout(bind, 100);
        return;
    }
    if (video === next) {
        return;
    }
    unbind();
    video = next;
    for (const type of forwarded) {
        video.addEventListener(type, onEvent);
    }
    emit("duration_change", { value: finite(video.duration) });
    emit("time_update", { value: finite(video.currentTime) });
    emit(video.paused ? "pause" : "play");
}

function unbind() {
    if (!video) {
        return;
    }
    for (const type of forwarded) {
        video.removeEventListener(type, onEvent);
    }
    video = null;
}

while (true) {
    const msg = await dioxus.recv();
    if (!msg) {
        continue;
    }
    if (msg.kind === "attach") {
        session = msg.element;
        bind();
        continue;
    }
    if (msg.kind === "detach") {
        unbind();
        session = null;
        continue;
    }
    if (!video) {
        continue;
    }
    try {
        if (msg.kind === "play") {
            const pending = video.play();
            if (pending && pending.catch) {
                pending.catch((err) => emit("play_rejected", { reason: String((err && err.name) || err) }));
            }
        } else if (msg.kind === "pause") {
            video.pause();
        } else if (msg.kind === "mute") {
            video.muted = !!msg.muted;
        } else if (msg.kind === "seek") {
            video.currentTime = msg.seconds;
        }
    } catch (err) {
        if (msg.kind === "play") {
            emit("play_rejected", { reason: String((err && err.name) || err) });
        }
    }
}
"#;

/// Re-parents the media surface. Replies `mount_missing` when a target
/// container is not in the document, and rescues the surface into the parking
/// container when its current container is removed under it.
pub const PORTAL_BRIDGE_SCRIPT: &str = r#"
const surfaceId = "lesson-media-surface";
const parkingId = "media-parking";
let surface = null;
let current = null;

function findSurface() {
    if (!surface || !surface.isConnected) {
        surface = document.getElementById(surfaceId) || surface;
    }
    return surface;
}

function parkSurface() {
    const node = findSurface();
    const parking = document.getElementById(parkingId);
    if (node && parking && node.parentElement !== parking) {
        parking.appendChild(node);
    }
    current = null;
}

const rescue = new MutationObserver(() => {
    // Only rescue when the container went away; a surface removed on its own
    // has no parent and is gone for good.
    if (!surface || surface.isConnected || !surface.parentElement) {
        return;
    }
    const lost = current;
    parkSurface();
    if (lost) {
        dioxus.send({ kind: "mount_missing", mount: lost });
    }
});
rescue.observe(document.body, { childList: true, subtree: true });

function relocate(mountId, attempt) {
    const node = findSurface();
    const mount = document.getElementById(mountId);
    if (!node || !mount) {
        if (attempt < 3) {
            setTimeout(() => relocate(mountId, attempt + 1), 100);
        } else {
            dioxus.send({ kind: "mount_missing", mount: mountId });
        }
        return;
    }
    if (node.parentElement !== mount) {
        mount.appendChild(node);
    }
    current = mountId;
}

function scrollIntoView(mountId, attempt) {
    const mount = document.getElementById(mountId);
    if (!mount) {
        if (attempt < 5) {
            setTimeout(() => scrollIntoView(mountId, attempt + 1), 100);
        }
        return;
    }
    mount.scrollIntoView({ behavior: "smooth", block: "center" });
}

while (true) {
    const msg = await dioxus.recv();
    if (!msg) {
        continue;
    }
    if (msg.kind === "relocate") {
        relocate(msg.mount, 0);
    } else if (msg.kind === "park") {
        parkSurface();
    } else if (msg.kind === "teardown") {
        const node = findSurface();
        if (node) {
            const video = node.querySelector("video");
            if (video) {
                video.pause();
                video.removeAttribute("src");
                video.load();
            }
        }
        surface = null;
        current = null;
    } else if (msg.kind === "scroll_into_view") {
        scrollIntoView(msg.mount, 0);
    }
}
"#;

/// Reports the viewport size and the bounding boxes of every element tagged
/// `data-dock-anchor`, on scroll, resize and DOM changes.
pub const GEOMETRY_BRIDGE_SCRIPT: &str = r#"
const scrollHostId = "page-scroll-host";
let last = null;
let queued = false;

function sendGeometry() {
    queued = false;
    const host = document.getElementById(scrollHostId);
    const contentTop = host ? host.getBoundingClientRect().top : 0;
    const anchors = [];
    for (const node of document.querySelectorAll("[data-dock-anchor]")) {
        const rect = node.getBoundingClientRect();
        anchors.push({
            id: node.id,
            rect: { x: rect.left, y: rect.top, width: rect.width, height: rect.height }
        });
    }
    const next = {
        viewport: { width: window.innerWidth, height: window.innerHeight },
        content_top: contentTop,
        anchors: anchors
    };
    const encoded = JSON.stringify(next);
    if (encoded === last) {
        return;
    }
    last = encoded;
    dioxus.send(next);
}

function schedule() {
    if (queued) {
        return;
    }
    queued = true;
    requestAnimationFrame(sendGeometry);
}

window.addEventListener("scroll", schedule, { passive: true, capture: true });
window.addEventListener("resize", schedule, { passive: true });
new MutationObserver(schedule).observe(document.body, { childList: true, subtree: true });
schedule();
await new Promise(() => {});
"#;
