//! Chart.js backend. The library is loaded globally from the page; we reach
//! it through `js_sys::Reflect` rather than a static binding so the frontend
//! builds without a JS toolchain in the loop.

use crate::charts::spec::{ChartData, ChartSpec};
use crate::charts::tooltip::{format_tooltip, TooltipKind, TooltipPoint};
use crate::render::engine::{ChartEngine, ChartHandle, Transition};
use js_sys::{Array, Function, Object, Reflect};
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type TooltipClosure = Closure<dyn FnMut(JsValue) -> JsValue>;

pub struct ChartJsEngine;

impl ChartJsEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChartJsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartEngine for ChartJsEngine {
    fn create(&self, mount_id: &str, spec: &ChartSpec) -> Option<Box<dyn ChartHandle>> {
        let canvas = web_sys::window()?
            .document()?
            .get_element_by_id(mount_id)?;

        let config = match JsValue::from_serde(&spec.to_config()) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to build chart config for '{}': {}", mount_id, e);
                return None;
            }
        };

        let tooltip = match &spec.tooltip {
            TooltipKind::Default => None,
            kind => {
                let closure = tooltip_closure(kind.clone(), spec.horizontal);
                if let Err(e) = install_tooltip(&config, &closure) {
                    warn!("Failed to wire tooltip for '{}': {:?}", mount_id, e);
                }
                Some(closure)
            }
        };

        let chart = match construct_chart(&canvas, &config) {
            Ok(chart) => chart,
            Err(e) => {
                warn!("Chart.js constructor failed for '{}': {:?}", mount_id, e);
                return None;
            }
        };

        Some(Box::new(ChartJsHandle {
            chart,
            _tooltip: tooltip,
        }))
    }
}

fn construct_chart(canvas: &web_sys::Element, config: &JsValue) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let ctor = Reflect::get(&window, &JsValue::from_str("Chart"))?;
    let ctor: Function = ctor
        .dyn_into()
        .map_err(|_| JsValue::from_str("global Chart is not a constructor"))?;
    let args = Array::of2(canvas.as_ref(), config);
    Reflect::construct(&ctor, &args).map(JsValue::from)
}

/// Places a `label` callback at `options.plugins.tooltip.callbacks` in the
/// serialized config.
fn install_tooltip(config: &JsValue, closure: &TooltipClosure) -> Result<(), JsValue> {
    let options = Reflect::get(config, &JsValue::from_str("options"))?;
    let plugins = Reflect::get(&options, &JsValue::from_str("plugins"))?;
    let tooltip = Object::new();
    let callbacks = Object::new();
    Reflect::set(&callbacks, &JsValue::from_str("label"), closure.as_ref())?;
    Reflect::set(&tooltip, &JsValue::from_str("callbacks"), &callbacks)?;
    Reflect::set(&plugins, &JsValue::from_str("tooltip"), &tooltip)?;
    Ok(())
}

fn tooltip_closure(kind: TooltipKind, horizontal: bool) -> TooltipClosure {
    Closure::wrap(Box::new(move |context: JsValue| {
        let point = resolve_point(&context, horizontal);
        let lines = format_tooltip(&kind, &point);
        if lines.len() == 1 {
            return JsValue::from_str(&lines[0]);
        }
        lines
            .iter()
            .map(|line| JsValue::from_str(line))
            .collect::<Array>()
            .into()
    }) as Box<dyn FnMut(JsValue) -> JsValue>)
}

fn get(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

/// Translates the Chart.js tooltip context into a `TooltipPoint`. Dataset
/// values are read live from the chart, so refreshed data is reflected.
fn resolve_point(context: &JsValue, horizontal: bool) -> TooltipPoint {
    let dataset = get(context, "dataset");
    let parsed = get(context, "parsed");

    // Doughnut charts parse to a bare number; cartesian charts to {x, y}.
    let (x, value) = match parsed.as_f64() {
        Some(number) => (0.0, number),
        None => {
            let x = get(&parsed, "x").as_f64().unwrap_or(0.0);
            let y = get(&parsed, "y").as_f64().unwrap_or(0.0);
            if horizontal {
                (y, x)
            } else {
                (x, y)
            }
        }
    };

    let dataset_values = Array::from(&get(&dataset, "data"))
        .iter()
        .map(|entry| entry.as_f64().unwrap_or(0.0))
        .collect();

    TooltipPoint {
        dataset_label: get(&dataset, "label").as_string().unwrap_or_default(),
        label: get(context, "label").as_string().unwrap_or_default(),
        index: get(context, "dataIndex").as_f64().unwrap_or(0.0) as usize,
        x,
        value,
        dataset_values,
    }
}

struct ChartJsHandle {
    chart: JsValue,
    // Kept alive for as long as Chart.js may invoke it.
    _tooltip: Option<TooltipClosure>,
}

impl ChartJsHandle {
    fn call0(&self, method: &str) -> Result<(), JsValue> {
        let func: Function = Reflect::get(&self.chart, &JsValue::from_str(method))?.dyn_into()?;
        func.call0(&self.chart)?;
        Ok(())
    }
}

impl ChartHandle for ChartJsHandle {
    fn replace_data(&mut self, data: &ChartData) {
        let result: Result<(), JsValue> = (|| {
            let chart_data = Reflect::get(&self.chart, &JsValue::from_str("data"))?;

            let labels: Array = data
                .labels
                .iter()
                .map(|label| JsValue::from_str(label))
                .collect();
            Reflect::set(&chart_data, &JsValue::from_str("labels"), &labels)?;

            let datasets = Array::from(&Reflect::get(
                &chart_data,
                &JsValue::from_str("datasets"),
            )?);
            for (i, series) in data.series.iter().enumerate() {
                let dataset = datasets.get(i as u32);
                if dataset.is_undefined() {
                    break;
                }
                let values = JsValue::from_serde(&series.to_json())
                    .map_err(|e| JsValue::from_str(&e.to_string()))?;
                Reflect::set(&dataset, &JsValue::from_str("data"), &values)?;
            }
            Ok(())
        })();
        if let Err(e) = result {
            warn!("Failed to replace chart data: {:?}", e);
        }
    }

    fn redraw(&mut self, transition: Transition) {
        let mode = match transition {
            Transition::Active => "active",
            Transition::Instant => "none",
        };
        let result: Result<(), JsValue> = (|| {
            let update: Function =
                Reflect::get(&self.chart, &JsValue::from_str("update"))?.dyn_into()?;
            update.call1(&self.chart, &JsValue::from_str(mode))?;
            Ok(())
        })();
        if let Err(e) = result {
            warn!("Chart update failed: {:?}", e);
        }
    }

    fn destroy(&mut self) {
        if let Err(e) = self.call0("destroy") {
            warn!("Chart destroy failed: {:?}", e);
        }
    }
}
