//! Lesson store implementation.

use dashmap::DashMap;
use uuid::Uuid;

use learnhub_entity::lesson::Lesson;

/// Arena holding the lesson catalog, indexed by id.
#[derive(Debug, Default)]
pub struct LessonStore {
    arena: DashMap<Uuid, Lesson>,
}

impl LessonStore {
    /// Create an empty lesson store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-formed lesson record.
    pub fn insert(&self, lesson: Lesson) {
        self.arena.insert(lesson.id, lesson);
    }

    /// Find a lesson by ID.
    pub fn find_by_id(&self, id: Uuid) -> Option<Lesson> {
        self.arena.get(&id).map(|l| l.clone())
    }

    /// Replace an existing record with an updated copy.
    pub fn replace(&self, lesson: Lesson) {
        self.arena.insert(lesson.id, lesson);
    }

    /// Remove a lesson, returning the removed record.
    pub fn remove(&self, id: Uuid) -> Option<Lesson> {
        self.arena.remove(&id).map(|(_, l)| l)
    }

    /// All lessons, ordered by creation time then title.
    pub fn all(&self) -> Vec<Lesson> {
        let mut lessons: Vec<Lesson> = self.arena.iter().map(|l| l.clone()).collect();
        lessons.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.title.cmp(&b.title)));
        lessons
    }

    /// Lessons directly in the given category.
    pub fn by_category(&self, category_id: Uuid) -> Vec<Lesson> {
        let mut lessons: Vec<Lesson> = self
            .arena
            .iter()
            .filter(|l| l.category_id == category_id)
            .map(|l| l.clone())
            .collect();
        lessons.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.title.cmp(&b.title)));
        lessons
    }

    /// Lessons owned by the given teacher.
    pub fn by_teacher(&self, teacher_id: Uuid) -> Vec<Lesson> {
        let mut lessons: Vec<Lesson> = self
            .arena
            .iter()
            .filter(|l| l.teacher_id == Some(teacher_id))
            .map(|l| l.clone())
            .collect();
        lessons.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.title.cmp(&b.title)));
        lessons
    }

    /// Whether any lesson sits directly in the given category.
    pub fn any_in_category(&self, category_id: Uuid) -> bool {
        self.arena.iter().any(|l| l.category_id == category_id)
    }

    /// Number of lessons.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}
