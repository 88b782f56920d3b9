//! In-app navigation targets.

use crate::constants::LESSON_DOCK_ID;

/// Logical page identifiers. Only pages that embed the lesson video declare a
/// docking container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Landing,
    CourseOverview,
    Lesson,
    Notes,
    Subscription,
    MyCourses,
}

impl Route {
    /// Every route, in navigation-bar order.
    pub const ALL: [Route; 6] = [
        Route::Landing,
        Route::CourseOverview,
        Route::Lesson,
        Route::Notes,
        Route::Subscription,
        Route::MyCourses,
    ];

    /// Parse a location path. Unknown paths land on the landing page.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "" => Route::Landing,
            "/dashboard" => Route::CourseOverview,
            "/dashboard/lesson" => Route::Lesson,
            "/notes" => Route::Notes,
            "/subscription" => Route::Subscription,
            "/my-courses" => Route::MyCourses,
            _ => Route::Landing,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::CourseOverview => "/dashboard",
            Route::Lesson => "/dashboard/lesson",
            Route::Notes => "/notes",
            Route::Subscription => "/subscription",
            Route::MyCourses => "/my-courses",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::CourseOverview => "Dashboard",
            Route::Lesson => "Lesson",
            Route::Notes => "Notes",
            Route::Subscription => "Subscription",
            Route::MyCourses => "My Courses",
        }
    }

    /// DOM id of the container this page offers for the docked video, if any.
    pub fn dock_container(self) -> Option<&'static str> {
        match self {
            Route::Lesson => Some(LESSON_DOCK_ID),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_trailing_slash_and_unknown_paths() {
        assert_eq!(Route::from_path("/dashboard/lesson/"), Route::Lesson);
        assert_eq!(Route::from_path("/nowhere"), Route::Landing);
    }

    #[test]
    fn test_only_lesson_docks() {
        assert_eq!(Route::Lesson.dock_container(), Some(LESSON_DOCK_ID));
        assert!(Route::Notes.dock_container().is_none());
        assert!(Route::Landing.dock_container().is_none());
    }
}
