//! DOM renderer
//!
//! Builds the dial rings, the piano strip and the staves with web-sys and
//! updates them on every frame. The page supplies the containers:
//!
//! - `#chromatic-outer-circle`, `#chromatic-inner-circle`
//! - `#fifths-outer-circle`, `#fifths-inner-circle`
//! - `.current-key-display` (one per dial, chromatic first) holding `.key-name`
//! - `.piano-container`
//! - `#key-signature-container`
//!
//! A missing container only disables the part of the widget that lives in it.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::WheelRenderer;
use crate::errors::WheelError;
use crate::layout::{LayoutConfig, LayoutEngine, RenderStaff, ScaleHighlight};
use crate::models::{Dial, Keyboard};

const PIANO_CONTAINER: &str = ".piano-container";
const KEY_SIGNATURE_CONTAINER: &str = "key-signature-container";
const CENTER_TEXT: &str = ".current-key-display";
const KEY_NAME: &str = ".key-name";
const PIANO_KEYS: &str = ".piano .white, .piano .black";

fn outer_circle_id(dial: Dial) -> String {
    format!("{}-outer-circle", dial.as_str())
}

fn inner_circle_id(dial: Dial) -> String {
    format!("{}-inner-circle", dial.as_str())
}

pub struct DomRenderer {
    document: Document,
    config: LayoutConfig,
}

impl DomRenderer {
    pub fn new(config: LayoutConfig) -> Result<Self, WheelError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| WheelError::Dom("no document available".to_string()))?;
        Ok(Self { document, config })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Create the static parts of the widget: piano keys and dial labels.
    /// Parts left by an earlier mount are replaced, not duplicated.
    pub fn mount(&self, engine: &LayoutEngine) -> Result<(), WheelError> {
        self.create_piano(engine.keyboard())?;
        for dial in Dial::ALL {
            self.create_dial_rings(engine, dial)?;
        }
        Ok(())
    }

    fn create(&self, tag: &str, class: &str) -> Result<Element, WheelError> {
        let el = self.document.create_element(tag)?;
        el.set_class_name(class);
        Ok(el)
    }

    fn elements(&self, selector: &str) -> Result<Vec<Element>, WheelError> {
        let list = self.document.query_selector_all(selector)?;
        Ok((0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    /// Remove what an earlier mount left in `parent`
    fn clear(&self, parent: &Element, selector: &str) -> Result<(), WheelError> {
        let stale = parent.query_selector_all(selector)?;
        for el in (0..stale.length())
            .filter_map(|i| stale.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
        {
            el.remove();
        }
        Ok(())
    }

    /// Measured width of an element, or the configured dial diameter
    fn diameter_of(&self, el: &Element) -> f32 {
        el.dyn_ref::<HtmlElement>()
            .map(|html| html.offset_width())
            .filter(|&w| w > 0)
            .map(|w| w as f32)
            .unwrap_or(self.config.dial_diameter)
    }

    fn create_piano(&self, keyboard: &Keyboard) -> Result<(), WheelError> {
        let Some(container) = self.document.query_selector(PIANO_CONTAINER)? else {
            log::warn!("{} not found, keyboard disabled", PIANO_CONTAINER);
            return Ok(());
        };

        self.clear(&container, ":scope > .piano")?;
        let piano = self.create("ul", "piano")?;
        for key in keyboard.keys() {
            let li = self.create("li", if key.is_black { "black" } else { "white" })?;
            li.set_attribute("data-note", &key.id.data_note())?;

            let name = self.create("span", "note-name")?;
            name.set_text_content(key.label.as_deref());
            let degree = self.create("span", "scale-degree")?;
            li.append_child(&name)?;
            li.append_child(&degree)?;

            // Black keys nest inside the white key to their left
            match piano.last_element_child() {
                Some(white) if key.is_black => white.append_child(&li)?,
                _ => piano.append_child(&li)?,
            };
        }
        container.append_child(&piano)?;
        log::debug!("created piano with {} keys", keyboard.len());
        Ok(())
    }

    fn create_dial_rings(&self, engine: &LayoutEngine, dial: Dial) -> Result<(), WheelError> {
        if let Some(outer) = self.document.get_element_by_id(&outer_circle_id(dial)) {
            self.clear(&outer, ":scope > .note")?;
            let (labels, _) = engine.dial_rings(dial, self.diameter_of(&outer));
            for label in labels {
                let note = self.create("div", "note")?;
                set_style(&note, "transform", &format!("translate({}px, {}px)", label.x, label.y))?;
                if label.is_black_key {
                    note.set_attribute("data-is-black-key", "true")?;
                }
                let text = self.create("div", "note-label")?;
                text.set_text_content(Some(&label.text));
                note.append_child(&text)?;
                outer.append_child(&note)?;
            }
        } else {
            log::warn!("#{} not found, skipping note labels", outer_circle_id(dial));
        }

        if let Some(inner) = self.document.get_element_by_id(&inner_circle_id(dial)) {
            self.clear(&inner, ":scope > .degree")?;
            let (_, degrees) = engine.dial_rings(dial, self.diameter_of(&inner));
            for degree in degrees {
                let el = self.create("div", "degree")?;
                el.set_text_content(Some(&degree.degree.to_string()));
                set_style(&el, "transform", &format!("translate({}px, {}px)", degree.x, degree.y))?;
                inner.append_child(&el)?;
            }
        } else {
            log::warn!("#{} not found, skipping degree labels", inner_circle_id(dial));
        }
        Ok(())
    }

    fn create_staff(&self, staff: &RenderStaff) -> Result<Element, WheelError> {
        let wrapper = self.create("div", "staff-wrapper")?;
        for top in &staff.line_tops {
            let line = self.create("div", "staff-line")?;
            set_style(&line, "top", &format!("{}em", top))?;
            wrapper.append_child(&line)?;
        }

        let clef = self.create("span", "clef")?;
        clef.set_text_content(Some(&staff.clef_glyph.to_string()));
        set_style(&clef, "font-size", &format!("{}em", self.config.clef_font_size))?;
        set_style(&clef, "top", &format!("{}em", staff.clef_top))?;
        set_style(&clef, "left", &format!("{}px", self.config.clef_left))?;
        wrapper.append_child(&clef)?;

        for accidental in &staff.accidentals {
            let el = self.create("span", "accidental")?;
            el.set_text_content(Some(&accidental.glyph.to_string()));
            set_style(&el, "font-size", &format!("{}em", self.config.accidental_font_size))?;
            set_style(&el, "top", &format!("{}em", accidental.offset))?;
            set_style(&el, "left", &format!("{}px", accidental.left))?;
            wrapper.append_child(&el)?;
        }
        Ok(wrapper)
    }
}

fn set_style(el: &Element, property: &str, value: &str) -> Result<(), WheelError> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

impl WheelRenderer for DomRenderer {
    fn render_dial(&mut self, dial: Dial, angle: f64) -> Result<(), WheelError> {
        match self.document.get_element_by_id(&inner_circle_id(dial)) {
            Some(inner) => set_style(
                &inner,
                "transform",
                &format!("translate(-50%, -50%) rotate({}deg)", angle),
            )?,
            None => log::debug!("#{} missing, not rotated", inner_circle_id(dial)),
        }

        let index = match dial {
            Dial::Chromatic => 0,
            Dial::Fifths => 1,
        };
        match self.elements(CENTER_TEXT)?.get(index) {
            Some(center) => set_style(
                center,
                "transform",
                &format!("translate(-50%, -50%) rotate({}deg)", -angle),
            )?,
            None => log::debug!("no centre text for {} dial", dial.as_str()),
        }
        Ok(())
    }

    fn render_key_name(&mut self, name: &str) -> Result<(), WheelError> {
        for el in self.elements(KEY_NAME)? {
            el.set_text_content(Some(name));
        }
        Ok(())
    }

    fn render_keyboard_highlights(&mut self, highlights: &[ScaleHighlight]) -> Result<(), WheelError> {
        for key in self.elements(PIANO_KEYS)? {
            key.class_list().remove_1("highlight")?;
            if let Some(degree) = key.query_selector(".scale-degree")? {
                degree.set_text_content(Some(""));
            }
        }

        for highlight in highlights {
            let selector = format!(".piano [data-note=\"{}\"]", highlight.key.data_note());
            let Some(key) = self.document.query_selector(&selector)? else {
                log::debug!("no key element for {}, skipping", highlight.key);
                continue;
            };
            key.class_list().add_1("highlight")?;
            if let Some(degree) = key.query_selector(".scale-degree")? {
                degree.set_text_content(Some(&highlight.degree.to_string()));
            }
        }
        Ok(())
    }

    fn render_staff(&mut self, staves: &[RenderStaff]) -> Result<(), WheelError> {
        let Some(container) = self.document.get_element_by_id(KEY_SIGNATURE_CONTAINER) else {
            log::debug!("#{} missing, staves not drawn", KEY_SIGNATURE_CONTAINER);
            return Ok(());
        };
        container.set_inner_html("");
        for staff in staves {
            let wrapper = self.create_staff(staff)?;
            container.append_child(&wrapper)?;
        }
        Ok(())
    }
}
