use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use crate::models::Project;

/// Filter token that matches every project.
pub const ALL: &str = "ALL";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("column count must be at least 1, got {0}")]
    InvalidColumnCount(usize),
}

/// Render-ready projection of a project collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectGrid {
    /// Filtered projects, chunked into rows of at most `column_count`.
    pub rows: Vec<Vec<Project>>,
    /// Every token in the unfiltered collection, for the filter menu.
    pub tokens: Vec<String>,
}

impl ProjectGrid {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// Whether `project` passes the `active` filter token.
///
/// A project passes when the token is [`ALL`], when its category equals the
/// token, or when any technology contains the token ignoring case.
pub fn matches(project: &Project, active: &str) -> bool {
    if active == ALL || project.category.as_str() == active {
        return true;
    }
    let needle = active.to_lowercase();
    project
        .technologies
        .iter()
        .any(|tech| tech.to_lowercase().contains(&needle))
}

/// Upper-cased technologies and category names of `projects`, de-duplicated
/// and sorted.
pub fn technology_tokens(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|p| {
            p.technologies
                .iter()
                .map(|t| t.to_uppercase())
                .chain(std::iter::once(p.category.as_str().to_string()))
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn filter_projects(
    projects: &[Project],
    column_count: usize,
    active: &str,
) -> Result<ProjectGrid, FilterError> {
    if column_count == 0 {
        return Err(FilterError::InvalidColumnCount(column_count));
    }
    if projects.is_empty() {
        return Ok(ProjectGrid::default());
    }

    let filtered = projects
        .iter()
        .filter(|p| matches(p, active))
        .cloned()
        .collect::<Vec<_>>();
    let rows = filtered
        .chunks(column_count)
        .map(|row| row.to_vec())
        .collect();

    Ok(ProjectGrid {
        rows,
        tokens: technology_tokens(projects),
    })
}

pub fn is_token_active(tech: &str, active: &str) -> bool {
    active == tech.to_uppercase()
}

/// Technologies ordered by how many projects use them. Ties keep the order in
/// which the technology first appears.
pub fn most_used_technologies(projects: &[Project], limit: usize) -> Vec<(String, usize)> {
    let mut order = Vec::new();
    let mut counts = HashMap::<&str, usize>::new();
    for tech in projects.iter().flat_map(|p| p.technologies.iter()) {
        let count = counts.entry(tech.as_str()).or_insert_with(|| {
            order.push(tech.as_str());
            0
        });
        *count += 1;
    }
    let mut ranked = order
        .into_iter()
        .map(|tech| (tech.to_string(), counts[tech]))
        .collect::<Vec<_>>();
    // stable sort keeps first-seen order among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

/// Projects most similar to the one with `id`, best first.
pub fn related_projects<'a>(projects: &'a [Project], id: u32, limit: usize) -> Vec<&'a Project> {
    let current = if let Some(p) = projects.iter().find(|p| p.id == id) {
        p
    } else {
        return Vec::new();
    };
    let mut scored = projects
        .iter()
        .filter(|p| p.id != id)
        .map(|p| {
            let mut score = p
                .technologies
                .iter()
                .filter(|t| current.technologies.contains(t))
                .count();
            if p.category == current.category {
                score += 3;
            }
            (p, score)
        })
        .filter(|(_, score)| *score > 0)
        .collect::<Vec<_>>();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().take(limit).map(|(p, _)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn project(id: u32, category: Category, technologies: &[&str]) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: String::new(),
            image: String::new(),
            github_url: format!("https://github.com/example/{id}"),
            deployment_url: None,
            status: None,
            features: String::new(),
            technologies: technologies.iter().map(|s| s.to_string()).collect(),
            category,
            technical_focus: Vec::new(),
            code_highlights: Vec::new(),
            learning_outcomes: None,
            gif_play: None,
            plan_url: None,
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project(1, Category::React, &["React", "Redux", "Firebase"]),
            project(2, Category::FullStack, &["React", "Node", "PostgreSQL"]),
            project(3, Category::Backend, &["Node", "Express", "JWT"]),
            project(4, Category::React, &["JavaScript", "HTML5 Canvas"]),
            project(5, Category::FullStack, &["Python", "Django", "WebSockets"]),
        ]
    }

    fn ids(grid: &ProjectGrid) -> Vec<Vec<u32>> {
        grid.rows
            .iter()
            .map(|row| row.iter().map(|p| p.id).collect())
            .collect()
    }

    #[test]
    fn test_all_reassembles_input() {
        let projects = sample();
        for cols in 1..=7 {
            let grid = filter_projects(&projects, cols, ALL).unwrap();
            let flat = grid.rows.concat();
            assert_eq!(flat, projects, "column count {cols}");
            assert!(grid.rows.iter().all(|row| row.len() <= cols && !row.is_empty()));
        }
    }

    #[test]
    fn test_chunking() {
        let grid = filter_projects(&sample(), 2, ALL).unwrap();
        assert_eq!(ids(&grid), vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert_eq!(grid.len(), 5);
    }

    #[test]
    fn test_technology_match_is_case_insensitive_substring() {
        let grid = filter_projects(&sample(), 3, "react").unwrap();
        assert_eq!(ids(&grid), vec![vec![1, 2]]);

        // "SCRIPT" is a substring of "JavaScript"
        let grid = filter_projects(&sample(), 3, "SCRIPT").unwrap();
        assert_eq!(ids(&grid), vec![vec![4]]);
    }

    #[test]
    fn test_category_match() {
        // project 4 lists no React technology but is in the REACT category
        let grid = filter_projects(&sample(), 3, "REACT").unwrap();
        assert_eq!(ids(&grid), vec![vec![1, 2, 4]]);

        let grid = filter_projects(&sample(), 3, "BACKEND").unwrap();
        assert_eq!(ids(&grid), vec![vec![3]]);
    }

    #[test]
    fn test_filter_is_exact_over_rule() {
        let projects = sample();
        for token in ["NODE", "FULLSTACK", "py", "HTML5 CANVAS", "nothing"] {
            let grid = filter_projects(&projects, 2, token).unwrap();
            let kept = grid.rows.concat();
            assert!(kept.iter().all(|p| matches(p, token)));
            let expected = projects.iter().filter(|p| matches(p, token)).count();
            assert_eq!(kept.len(), expected, "token {token}");
        }
    }

    #[test]
    fn test_tokens_ignore_active_filter() {
        let projects = sample();
        let all = filter_projects(&projects, 3, ALL).unwrap().tokens;
        let filtered = filter_projects(&projects, 1, "Django").unwrap().tokens;
        let none = filter_projects(&projects, 2, "COBOL").unwrap().tokens;
        assert_eq!(all, filtered);
        assert_eq!(all, none);
        assert_eq!(
            all,
            vec![
                "BACKEND",
                "DJANGO",
                "EXPRESS",
                "FIREBASE",
                "FULLSTACK",
                "HTML5 CANVAS",
                "JAVASCRIPT",
                "JWT",
                "NODE",
                "POSTGRESQL",
                "PYTHON",
                "REACT",
                "REDUX",
                "WEBSOCKETS",
            ]
        );
    }

    #[test]
    fn test_empty_collection() {
        let grid = filter_projects(&[], 3, ALL).unwrap();
        assert!(grid.rows.is_empty());
        assert!(grid.tokens.is_empty());
    }

    #[test]
    fn test_zero_columns_rejected() {
        assert_eq!(
            filter_projects(&sample(), 0, ALL),
            Err(FilterError::InvalidColumnCount(0))
        );
    }

    #[test]
    fn test_idempotent() {
        let projects = sample();
        let first = filter_projects(&projects, 2, "NODE").unwrap();
        let second = filter_projects(&projects, 2, "NODE").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_token_active() {
        assert!(is_token_active("React", "REACT"));
        assert!(!is_token_active("React", "react"));
        assert!(!is_token_active("Redux", "REACT"));
    }

    #[test]
    fn test_most_used_technologies() {
        let ranked = most_used_technologies(&sample(), 3);
        assert_eq!(
            ranked,
            vec![
                ("React".to_string(), 2),
                ("Node".to_string(), 2),
                ("Redux".to_string(), 1),
            ]
        );
        assert!(most_used_technologies(&[], 5).is_empty());
    }

    #[test]
    fn test_related_projects() {
        let projects = sample();
        let related = related_projects(&projects, 1, 3)
            .into_iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();
        // 4 shares the category (3), 2 shares React (1), others share nothing
        assert_eq!(related, vec![4, 2]);

        assert!(related_projects(&projects, 99, 3).is_empty());
    }
}
