use crate::constants::*;
use crate::core::newsletter::{
    classify_response, insert_body, prepare, SignupEndpoint, SignupError, SubmitGuard,
    SUCCESS_MESSAGE,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

struct FormParts {
    input: Option<web::HtmlInputElement>,
    button: Option<web::HtmlButtonElement>,
    message: Option<web::HtmlElement>,
}

impl FormParts {
    fn find(document: &web::Document, form: &web::Element) -> Self {
        Self {
            input: document
                .get_element_by_id(NEWSLETTER_EMAIL_ID)
                .and_then(|el| el.dyn_into().ok()),
            button: form
                .query_selector("button[type=\"submit\"]")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into().ok()),
            message: document
                .get_element_by_id(NEWSLETTER_MESSAGE_ID)
                .and_then(|el| el.dyn_into().ok()),
        }
    }

    fn show_message(&self, text: &str, color: &str) {
        if let Some(message) = &self.message {
            message.set_text_content(Some(text));
            dom::set_style(message, "color", color);
        }
    }
}

pub fn wire(document: &web::Document) {
    let Some(form) = document.get_element_by_id(NEWSLETTER_FORM_ID) else {
        return;
    };
    let endpoint = SignupEndpoint::from_parts(SUPABASE_URL, SUPABASE_ANON_KEY);
    if endpoint.is_none() {
        log::warn!("[newsletter] endpoint not configured; signups disabled");
    }
    let guard = Rc::new(RefCell::new(SubmitGuard::default()));
    let doc = document.clone();
    let form_for_submit = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        if !guard.borrow_mut().try_begin() {
            return;
        }
        let guard = guard.clone();
        let parts = FormParts::find(&doc, &form_for_submit);
        let endpoint = endpoint.clone();
        spawn_local(async move {
            submit(&parts, endpoint.as_ref()).await;
            guard.borrow_mut().finish();
        });
    }) as Box<dyn FnMut(_)>);
    _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

async fn submit(parts: &FormParts, endpoint: Option<&SignupEndpoint>) {
    let original_label = parts.button.as_ref().and_then(|b| b.text_content());
    if let Some(button) = &parts.button {
        button.set_text_content(Some(NEWSLETTER_SUBMITTING_LABEL));
        button.set_disabled(true);
    }
    parts.show_message("", CSS_MESSAGE_OK_COLOR);

    let raw = parts.input.as_ref().map(|i| i.value()).unwrap_or_default();
    let result = match prepare(&raw) {
        Ok(email) => match endpoint {
            Some(endpoint) => subscribe(endpoint, &email).await,
            None => Err(SignupError::Unavailable),
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            log::info!("[newsletter] subscribed");
            parts.show_message(SUCCESS_MESSAGE, CSS_MESSAGE_OK_COLOR);
            if let Some(input) = &parts.input {
                input.set_value("");
            }
        }
        Err(e) => {
            if let SignupError::Remote(detail) = &e {
                log::error!("[newsletter] insert failed: {}", detail);
            }
            parts.show_message(&e.to_string(), CSS_MESSAGE_ERR_COLOR);
        }
    }

    if let Some(button) = &parts.button {
        button.set_text_content(original_label.as_deref());
        button.set_disabled(false);
    }

    let message = parts.message.clone();
    spawn_local(async move {
        dom::sleep_ms(MESSAGE_CLEAR_MS).await;
        if let Some(message) = message {
            message.set_text_content(Some(""));
            dom::set_style(&message, "color", CSS_MESSAGE_OK_COLOR);
        }
    });
}

async fn subscribe(endpoint: &SignupEndpoint, email: &str) -> Result<(), SignupError> {
    let body = insert_body(email).map_err(|e| SignupError::Remote(e.to_string()))?;
    let (status, text) = post(endpoint, &body)
        .await
        .map_err(|e| SignupError::Remote(format!("{:#}", e)))?;
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(classify_response(status, &text))
    }
}

async fn post(endpoint: &SignupEndpoint, body: &str) -> anyhow::Result<(u16, String)> {
    let headers = web::Headers::new().map_err(dom::js_err)?;
    for (name, value) in endpoint.headers() {
        headers.set(name, &value).map_err(dom::js_err)?;
    }
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_mode(web::RequestMode::Cors);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));
    let request =
        web::Request::new_with_str_and_init(&endpoint.table_url(NEWSLETTER_TABLE), &init)
            .map_err(dom::js_err)?;

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(dom::js_err)?
        .dyn_into()
        .map_err(dom::js_err)?;
    let status = response.status();
    let text = JsFuture::from(response.text().map_err(dom::js_err)?)
        .await
        .map_err(dom::js_err)?
        .as_string()
        .unwrap_or_default();
    Ok((status, text))
}
