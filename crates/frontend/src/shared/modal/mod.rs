use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Модальное окно мастера
///
/// Закрывается по Escape, кнопке "x" и клику по подложке; закрытие
/// решает владелец через `on_close`.
#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Подложка не закрывает окно (мастер с несохранёнными данными)
    #[prop(optional)]
    ignore_overlay: bool,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let handle_overlay_click = move |_| {
        if !ignore_overlay {
            on_close.run(());
        }
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
