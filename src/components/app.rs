use yew::prelude::*;

use super::globe_view::GlobeView;
use crate::model::GlobeConfig;

#[function_component(App)]
pub fn app() -> Html {
    let config = GlobeConfig::sustainability_default();

    html! {
        <div id="root" style="min-height:100vh; display:flex; align-items:center; justify-content:center; background:#0e1116; color:#e6edf3;">
            <div style="width:100%; text-align:center;">
                <h1 style="font-weight:600; margin-bottom:4px;">{"Global footprint"}</h1>
                <p style="opacity:0.7; margin-top:0;">{"Office sites sized by reported headcount. Drag to spin."}</p>
                <GlobeView config={config} />
            </div>
        </div>
    }
}
