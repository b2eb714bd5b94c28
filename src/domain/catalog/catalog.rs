//! Course catalog - immutable snapshot of every course definition.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{CatalogValidationError, CourseDefinition};
use crate::domain::foundation::CourseKey;

/// Immutable set of course definitions keyed by course key.
///
/// Passed by reference into every engine call. Replacing the catalog
/// means building a new value; nothing mutates one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument", into = "CatalogDocument")]
pub struct CourseCatalog {
    courses: BTreeMap<CourseKey, CourseDefinition>,
}

/// On-disk layout of a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub courses: Vec<CourseDefinition>,
}

impl CourseCatalog {
    /// Builds a catalog, checking keys, week ranges, and campus links.
    pub fn new(courses: Vec<CourseDefinition>) -> Result<Self, CatalogValidationError> {
        let mut map = BTreeMap::new();
        for course in courses {
            if course.name.trim().is_empty() {
                return Err(CatalogValidationError::MissingName(course.key));
            }
            if course.min_weeks > course.max_weeks {
                return Err(CatalogValidationError::InvalidWeekRange {
                    course: course.key,
                    min: course.min_weeks,
                    max: course.max_weeks,
                });
            }
            if map.contains_key(&course.key) {
                return Err(CatalogValidationError::DuplicateKey(course.key));
            }
            map.insert(course.key.clone(), course);
        }

        for course in map.values() {
            for (campus, target) in &course.campuses {
                if !map.contains_key(target) {
                    return Err(CatalogValidationError::UnknownCampusLink {
                        course: course.key.clone(),
                        campus: campus.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(Self { courses: map })
    }

    /// Looks up a course by key.
    pub fn get(&self, key: &CourseKey) -> Option<&CourseDefinition> {
        self.courses.get(key)
    }

    /// Looks up the course linked to `campus` by a dynamic-campus course.
    pub fn campus_course(&self, course: &CourseDefinition, campus: &str) -> Option<&CourseDefinition> {
        course.campuses.get(campus).and_then(|key| self.get(key))
    }

    /// Iterates courses in key order.
    pub fn courses(&self) -> impl Iterator<Item = &CourseDefinition> {
        self.courses.values()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl TryFrom<CatalogDocument> for CourseCatalog {
    type Error = CatalogValidationError;

    fn try_from(doc: CatalogDocument) -> Result<Self, Self::Error> {
        Self::new(doc.courses)
    }
}

impl From<CourseCatalog> for CatalogDocument {
    fn from(catalog: CourseCatalog) -> Self {
        Self {
            courses: catalog.courses.into_values().collect(),
        }
    }
}
