use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use tavolo::order::{OrderReply, OrderRequest};

const ORDER_ENDPOINT: &str = "/api/order/place";

/// POST the order and decode the reply. Any transport or shape problem
/// comes back as `Err`; the caller treats that the same as a rejected order.
pub(super) async fn place_order(order: &OrderRequest) -> Result<OrderReply, String> {
    let body = order.to_json()?;

    let headers = Headers::new().map_err(|_| "Headers::new() threw")?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|_| "headers.set() threw")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(headers.as_ref());
    init.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(ORDER_ENDPOINT, &init)
        .map_err(|_| "Request::new() threw")?;
    let window = web_sys::window().ok_or("no window")?;

    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| "network request failed")?;
    let resp: Response = resp.dyn_into().map_err(|_| "fetch returned a non-Response")?;

    let text = JsFuture::from(resp.text().map_err(|_| "text() threw")?)
        .await
        .map_err(|_| "reading the reply body failed")?;
    let raw = text.as_string().ok_or("reply body was not text")?;

    OrderReply::from_json(&raw)
}
