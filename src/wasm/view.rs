//! DOM rendering of the session.

use web_sys::{Document, Element};

use crate::session::view::SessionView;

pub const CONNECT_BUTTON_ID: &str = "connectBtn";
pub const BLOCK_HEIGHT_BUTTON_ID: &str = "blockHeightBtn";
pub const STATUS_ID: &str = "status";
pub const OUTPUT_ID: &str = "output";

const HIDDEN_CLASS: &str = "hidden";

/// The four page elements the session writes to.
pub struct DomView {
    pub connect_button: Element,
    pub block_height_button: Element,
    status: Element,
    output: Element,
}

impl DomView {
    /// Look up the page elements by id.
    pub fn from_document(document: &Document) -> Result<Self, String> {
        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| format!("Missing element #{}", id))
        };
        Ok(Self {
            connect_button: find(CONNECT_BUTTON_ID)?,
            block_height_button: find(BLOCK_HEIGHT_BUTTON_ID)?,
            status: find(STATUS_ID)?,
            output: find(OUTPUT_ID)?,
        })
    }
}

impl SessionView for DomView {
    fn set_status(&mut self, status: &str) {
        self.status.set_text_content(Some(status));
    }

    fn set_output(&mut self, output: &str) {
        self.output.set_text_content(Some(output));
    }

    fn show_connected(&mut self) {
        if let Err(e) = self.block_height_button.class_list().remove_1(HIDDEN_CLASS) {
            log!("Failed to reveal #{}: {:?}", BLOCK_HEIGHT_BUTTON_ID, e);
        }
        if let Err(e) = self.connect_button.class_list().add_1(HIDDEN_CLASS) {
            log!("Failed to hide #{}: {:?}", CONNECT_BUTTON_ID, e);
        }
    }
}
