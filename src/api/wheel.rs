//! The key wheel widget as a JavaScript object
//!
//! `KeyWheel` owns the wheel state and the DOM renderer. The four rotate
//! buttons are wired to it in `mount`; the rotate methods can also be called
//! directly from JavaScript.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::helpers::{layout_config_from_js, serialize, wheel_error};
use crate::layout::{LayoutConfig, LayoutEngine};
use crate::models::{Command, Dial};
use crate::renderers::{DomRenderer, WheelController};
use crate::{wasm_info, wasm_log, wasm_warn};

type SharedController = Rc<RefCell<WheelController<DomRenderer>>>;

#[wasm_bindgen]
pub struct KeyWheel {
    controller: SharedController,
    listeners: Vec<(Element, Closure<dyn FnMut()>)>,
    mounted: bool,
}

impl KeyWheel {
    fn with_config(config: LayoutConfig) -> Result<KeyWheel, JsValue> {
        let renderer = DomRenderer::new(config.clone()).map_err(wheel_error)?;
        let controller = WheelController::new(LayoutEngine::new(config), renderer);
        Ok(KeyWheel {
            controller: Rc::new(RefCell::new(controller)),
            listeners: Vec::new(),
            mounted: false,
        })
    }

    fn run(&self, command: Command) -> Result<u8, JsValue> {
        let mut controller = self
            .controller
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("KeyWheel is busy"))?;
        let state = controller.dispatch(command);
        wasm_log!("{:?} -> {}", command, state.pitch_class.key_display_name());
        Ok(state.pitch_class as u8)
    }

    fn unbind_buttons(&mut self) {
        for (button, closure) in self.listeners.drain(..) {
            // The page may already be gone; nothing to clean up then
            let _ = button.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }

    /// Bind a command to its button; a missing button leaves the command unbound
    fn bind_button(&mut self, command: Command) -> Result<(), JsValue> {
        let document = self.controller.borrow().renderer().document().clone();
        let Some(button) = document.get_element_by_id(command.button_id()) else {
            wasm_warn!("#{} not found, {:?} not bound", command.button_id(), command);
            return Ok(());
        };

        let controller = Rc::clone(&self.controller);
        let closure = Closure::<dyn FnMut()>::new(move || match controller.try_borrow_mut() {
            Ok(mut controller) => {
                controller.dispatch(command);
            }
            Err(_) => log::warn!("{:?} ignored, previous command still running", command),
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        self.listeners.push((button, closure));
        Ok(())
    }
}

#[wasm_bindgen]
impl KeyWheel {
    /// Create a wheel; `config` is an optional partial LayoutConfig object
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<KeyWheel, JsValue> {
        KeyWheel::with_config(layout_config_from_js(config)?)
    }

    /// Create a wheel from a YAML layout config
    #[wasm_bindgen(js_name = fromYaml)]
    pub fn from_yaml(source: &str) -> Result<KeyWheel, JsValue> {
        KeyWheel::with_config(LayoutConfig::from_yaml(source).map_err(wheel_error)?)
    }

    /// Build the piano and dial labels, wire the rotate buttons and draw the first frame
    pub fn mount(&mut self) -> Result<(), JsValue> {
        if self.mounted {
            wasm_warn!("KeyWheel already mounted");
            return Ok(());
        }
        // A failed earlier attempt may have bound some buttons already
        self.unbind_buttons();
        {
            let controller = self.controller.borrow();
            controller
                .renderer()
                .mount(controller.engine())
                .map_err(wheel_error)?;
        }
        for command in Command::ALL {
            self.bind_button(command)?;
        }
        self.controller.borrow_mut().render();
        self.mounted = true;
        wasm_info!("KeyWheel mounted with {} button(s) bound", self.listeners.len());
        Ok(())
    }

    #[wasm_bindgen(js_name = rotateChromaticLeft)]
    pub fn rotate_chromatic_left(&self) -> Result<u8, JsValue> {
        self.run(Command::RotateChromaticLeft)
    }

    #[wasm_bindgen(js_name = rotateChromaticRight)]
    pub fn rotate_chromatic_right(&self) -> Result<u8, JsValue> {
        self.run(Command::RotateChromaticRight)
    }

    #[wasm_bindgen(js_name = rotateFifthsLeft)]
    pub fn rotate_fifths_left(&self) -> Result<u8, JsValue> {
        self.run(Command::RotateFifthsLeft)
    }

    #[wasm_bindgen(js_name = rotateFifthsRight)]
    pub fn rotate_fifths_right(&self) -> Result<u8, JsValue> {
        self.run(Command::RotateFifthsRight)
    }

    #[wasm_bindgen(getter, js_name = pitchClass)]
    pub fn pitch_class(&self) -> u8 {
        self.controller.borrow().state().pitch_class as u8
    }

    #[wasm_bindgen(getter, js_name = keyName)]
    pub fn key_name(&self) -> String {
        self.controller.borrow().state().pitch_class.key_display_name().to_string()
    }

    #[wasm_bindgen(getter, js_name = chromaticAngle)]
    pub fn chromatic_angle(&self) -> f64 {
        self.controller.borrow().state().angle(Dial::Chromatic)
    }

    #[wasm_bindgen(getter, js_name = fifthsAngle)]
    pub fn fifths_angle(&self) -> f64 {
        self.controller.borrow().state().angle(Dial::Fifths)
    }

    /// The current frame as a JavaScript object
    #[wasm_bindgen(js_name = displayList)]
    pub fn display_list(&self) -> Result<JsValue, JsValue> {
        serialize(&self.controller.borrow().display_list(), "Failed to serialize display list")
    }

    /// The current frame as a JSON string
    #[wasm_bindgen(js_name = displayListJson)]
    pub fn display_list_json(&self) -> Result<String, JsValue> {
        self.controller
            .borrow()
            .display_list()
            .to_json()
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize display list: {}", e)))
    }
}

impl Drop for KeyWheel {
    fn drop(&mut self) {
        self.unbind_buttons();
    }
}
