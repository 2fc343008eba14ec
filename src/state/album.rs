// Paging over the photo list. Every operation is safe on an empty album.
use std::rc::Rc;
use yew::Reducible;

use crate::model::Photo;

pub fn wrap_prev(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((index % len + len - 1) % len)
}

pub fn wrap_next(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((index + 1) % len)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    photos: Rc<Vec<Photo>>,
    index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumAction {
    Prev,
    Next,
    Select(usize),
}

impl Album {
    pub fn new(photos: Rc<Vec<Photo>>) -> Self {
        Self { photos, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Current position, `None` when there is nothing to show.
    pub fn index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    pub fn current(&self) -> Option<&Photo> {
        self.photos.get(self.index)
    }

    pub fn go_prev(&mut self) -> Option<usize> {
        let i = wrap_prev(self.index, self.len())?;
        self.index = i;
        Some(i)
    }

    pub fn go_next(&mut self) -> Option<usize> {
        let i = wrap_next(self.index, self.len())?;
        self.index = i;
        Some(i)
    }

    /// Jump straight to a photo, e.g. from the thumbnail list. Out of range is ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.index = index;
        true
    }
}

impl Reducible for Album {
    type Action = AlbumAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let moved = match action {
            AlbumAction::Prev => next.go_prev().is_some(),
            AlbumAction::Next => next.go_next().is_some(),
            AlbumAction::Select(i) => next.select(i),
        };
        if moved && next.index != self.index {
            Rc::new(next)
        } else {
            self
        }
    }
}
