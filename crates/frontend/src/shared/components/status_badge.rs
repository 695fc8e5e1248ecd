use contracts::domain::common::status_label;
use leptos::prelude::*;
use thaw::*;

/// Бейдж "Đang hoạt động" / "Ngừng hoạt động"
#[component]
pub fn StatusBadge(is_active: bool) -> impl IntoView {
    let color = if is_active {
        BadgeColor::Success
    } else {
        BadgeColor::Danger
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {status_label(is_active)}
        </Badge>
    }
}

/// Бейдж значения справочника
#[component]
pub fn LabelBadge(#[prop(into)] label: String, color: BadgeColor) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {label}
        </Badge>
    }
}
