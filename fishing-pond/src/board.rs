use std::ops::{Index, IndexMut, Range};

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board<T> {
  fields: Vec<T>,
}

impl<T> Board<T> {
  pub fn new(len: usize, default: T) -> Self
  where
    T: Clone,
  {
    Self {
      fields: vec![default; len],
    }
  }

  pub fn len(&self) -> usize {
    self.fields.len()
  }

  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }

  /// Maps a player supplied position onto a field index, rejecting anything
  /// negative or past the end.
  pub fn pos_to_index(&self, pos: i64) -> Option<usize> {
    match usize::try_from(pos) {
      Ok(index) if index < self.fields.len() => Some(index),
      _ => None,
    }
  }

  pub fn get(&self, pos: i64) -> Option<&T> {
    self.pos_to_index(pos).map(|i| &self.fields[i])
  }

  pub fn get_mut(&mut self, pos: i64) -> Option<&mut T> {
    self.pos_to_index(pos).map(|i| &mut self.fields[i])
  }

  pub fn positions(&self) -> Range<usize> {
    0..self.fields.len()
  }

  pub fn positions_where<'a>(&'a self, mut pred: impl FnMut(&T) -> bool + 'a) -> impl Iterator<Item = usize> + 'a {
    self.enumerate().filter(move |(_, field)| pred(*field)).map(|(pos, _)| pos)
  }

  pub fn enumerate(&self) -> impl Iterator<Item = (usize, &T)> {
    self.fields.iter().enumerate()
  }

  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.fields.iter()
  }
}

impl<T> FromIterator<T> for Board<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self {
      fields: iter.into_iter().collect(),
    }
  }
}

impl<T> Index<usize> for Board<T> {
  type Output = T;

  fn index(&self, index: usize) -> &Self::Output {
    let len = self.fields.len();
    self
      .fields
      .get(index)
      .unwrap_or_else(|| panic!("Cannot access position {} on board with {} sectors", index, len))
  }
}

impl<T> IndexMut<usize> for Board<T> {
  fn index_mut(&mut self, index: usize) -> &mut T {
    let len = self.fields.len();
    self
      .fields
      .get_mut(index)
      .unwrap_or_else(|| panic!("Cannot mut-access position {} on board with {} sectors", index, len))
  }
}
