//! DOM implementation of [`DocumentSurface`].

use themeswitch_app::config::ThemeTarget;
use themeswitch_app::ports::DocumentSurface;
use themeswitch_domain::error::ThemeError;

use crate::error::HostError;

/// Writes icon classes and the theme attribute into the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomSurface;

/// The current window's document.
pub(crate) fn document() -> Result<web_sys::Document, HostError> {
    web_sys::window()
        .ok_or(HostError::NoWindow)?
        .document()
        .ok_or(HostError::NoDocument)
}

fn document_error(err: HostError) -> ThemeError {
    ThemeError::Document(Box::new(err))
}

impl DocumentSurface for DomSurface {
    fn set_icon_class(&self, element_id: &str, class: &str) -> Result<bool, ThemeError> {
        let document = document().map_err(document_error)?;
        let Some(element) = document.get_element_by_id(element_id) else {
            return Ok(false);
        };
        element.set_class_name(class);
        Ok(true)
    }

    fn set_theme_attribute(
        &self,
        target: ThemeTarget,
        name: &str,
        value: &str,
    ) -> Result<(), ThemeError> {
        let document = document().map_err(document_error)?;
        let container = match target {
            ThemeTarget::Body => document.body().map(web_sys::Element::from),
            ThemeTarget::Root => document.document_element(),
        }
        .ok_or(HostError::MissingContainer(target))
        .map_err(document_error)?;
        container
            .set_attribute(name, value)
            .map_err(|err| document_error(err.into()))
    }
}
