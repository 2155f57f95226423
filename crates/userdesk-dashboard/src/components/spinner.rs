//! Loading indicators

use leptos::*;

/// Spinner size variants
#[derive(Debug, Clone, Copy, Default)]
pub enum SpinnerSize {
    #[default]
    Md,
    Lg,
}

impl SpinnerSize {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Md => "spinner-md",
            Self::Lg => "spinner-lg",
        }
    }

    pub fn size(&self) -> u32 {
        match self {
            Self::Md => 32,
            Self::Lg => 48,
        }
    }
}

/// Basic spinning loader
#[component]
pub fn Spinner(
    #[prop(default = SpinnerSize::Md)] size: SpinnerSize,
) -> impl IntoView {
    let s = size.size();

    view! {
        <svg
            class=format!("spinner {}", size.class())
            width=s
            height=s
            viewBox="0 0 24 24"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <circle cx="12" cy="12" r="10" fill="none" stroke="var(--slate-bg)" stroke-width="3" />
            <circle
                cx="12"
                cy="12"
                r="10"
                fill="none"
                stroke="var(--teal)"
                stroke-width="3"
                stroke-linecap="round"
                stroke-dasharray="31.4 31.4"
                class="spinner-arc"
            />
        </svg>
    }
}

/// Spinner with a status line, announced politely to screen readers
#[component]
pub fn LoadingState(
    #[prop(into)] text: String,
    #[prop(default = SpinnerSize::Lg)] size: SpinnerSize,
) -> impl IntoView {
    view! {
        <div class="loading-state" role="status" aria-live="polite">
            <Spinner size=size />
            <p class="loading-text">{text}</p>
        </div>
    }
}
