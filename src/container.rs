use crate::config;
use crate::error::SurfaceError;
use crate::options::Position;
use crate::surface::Surface;
use std::collections::HashMap;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
struct Key {
    position: Position,
    class: String,
}

/// One display surface per position and custom class, created on first use and kept for the
/// lifetime of the page.
pub(crate) struct Containers<E> {
    containers: HashMap<Key, E>,
}

impl<E: Clone> Containers<E> {
    pub(crate) fn new() -> Self {
        Self {
            containers: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.containers.len()
    }

    /// Returns the container for the pair, creating and attaching it if needed. `None` when
    /// there is no page to attach to.
    pub(crate) fn container_for<S>(&mut self, surface: &S, position: Position, class: &str) -> Option<E>
    where
        S: Surface<Element = E>,
    {
        let key = Key {
            position,
            class: class.to_string(),
        };
        if let Some(container) = self.containers.get(&key) {
            return Some(container.clone());
        }
        if !surface.available() {
            return None;
        }

        match create(surface, position, class) {
            Ok(container) => {
                log::trace!("containers: created {} container", position);
                self.containers.insert(key, container.clone());
                Some(container)
            }
            Err(e) => {
                log::error!("unable to create toast container: {}", e);
                None
            }
        }
    }
}

fn create<S: Surface>(surface: &S, position: Position, class: &str) -> Result<S::Element, SurfaceError> {
    let container = surface.create_element("div")?;
    surface.add_class(
        &container,
        &format!(
            "{prefix}-container {prefix}-container--{position}",
            prefix = config::CLASS_PREFIX
        ),
    )?;
    surface.add_class(&container, class)?;
    // Only the toasts themselves take pointer input.
    surface.set_attribute(&container, "style", "pointer-events: none;")?;
    surface.attach(&container)?;
    Ok(container)
}
