//! Inline SVG icons used by the workstation panel

use leptos::*;

/// Icon size variants
#[derive(Debug, Clone, Copy, Default)]
pub enum IconSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl IconSize {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Sm => "icon-sm",
            Self::Md => "icon-md",
            Self::Lg => "icon-lg",
            Self::Xl => "icon-xl",
        }
    }

    pub fn size(&self) -> u32 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
            Self::Xl => 32,
        }
    }
}

/// Decorative SVG wrapper. Icons are always `aria-hidden`; the owning
/// control carries the accessible name.
#[component]
fn IconBase(
    #[prop(into)] path: String,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let s = size.size();
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=s
            height=s
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
            class=format!("icon {} {}", size.class(), class)
            inner_html=path
        />
    }
}

macro_rules! icon {
    ($name:ident, $path:literal) => {
        #[component]
        pub fn $name(
            #[prop(default = IconSize::Md)] size: IconSize,
            #[prop(optional, into)] class: String,
        ) -> impl IntoView {
            let path: &'static str = $path;
            view! { <IconBase path=path size=size class=class /> }
        }
    };
}

icon!(IconUsers, r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#);
icon!(IconPlus, r#"<line x1="12" x2="12" y1="5" y2="19"/><line x1="5" x2="19" y1="12" y2="12"/>"#);
icon!(IconUpload, r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="17 8 12 3 7 8"/><line x1="12" x2="12" y1="3" y2="15"/>"#);
icon!(IconDownload, r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" x2="12" y1="15" y2="3"/>"#);
icon!(IconLayers, r#"<polygon points="12 2 2 7 12 12 22 7 12 2"/><polyline points="2 17 12 22 22 17"/><polyline points="2 12 12 17 22 12"/>"#);
icon!(IconRefresh, r#"<path d="M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8"/><path d="M21 3v5h-5"/><path d="M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16"/><path d="M3 21v-5h5"/>"#);
icon!(IconChevronLeft, r#"<polyline points="15 18 9 12 15 6"/>"#);
icon!(IconChevronRight, r#"<polyline points="9 18 15 12 9 6"/>"#);
icon!(IconClock, r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#);
icon!(IconActivity, r#"<path d="M22 12h-4l-3 9L9 3l-3 9H2"/>"#);
icon!(IconCalendar, r#"<rect width="18" height="18" x="3" y="4" rx="2" ry="2"/><line x1="16" x2="16" y1="2" y2="6"/><line x1="8" x2="8" y1="2" y2="6"/><line x1="3" x2="21" y1="10" y2="10"/>"#);
