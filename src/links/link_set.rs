//! Which dependencies receive documentation links.
//!
//! The declared dependencies of the tracked configuration act as a filter and the
//! resolved compile classpath supplies versions and component kinds. Only
//! dependencies present in both are linked; anything the classpath pulls in
//! transitively is skipped.
//!
//! | Component kind | Destination |
//! |---|---|
//! | external module | [`LinkState::link_set`] |
//! | project of this build | [`ProjectLinksConfiguration`] as a project reference |
//! | project of an included build | [`ProjectLinksConfiguration`] as `group:name` |

use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use crate::core::{DependencyIdentity, LinksError, ModuleKey};
use crate::resolver::{
    ComponentKind, DependencyResolver, DependencyResult, DocumentationDependency,
};

/// Non-transitive side configuration resolving javadoc archives of project
/// dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectLinksConfiguration {
    dependencies: Vec<DocumentationDependency>,
}

impl ProjectLinksConfiguration {
    #[must_use]
    pub fn dependencies(&self) -> &[DocumentationDependency] {
        &self.dependencies
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    fn add(&mut self, dependency: DocumentationDependency) {
        self.dependencies.push(dependency);
    }
}

/// Task-owned link state: the link set and the side configuration.
///
/// Both collections are only ever replaced together by [`LinkState::rebuild`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkState {
    link_set: Vec<DependencyIdentity>,
    project_links: ProjectLinksConfiguration,
}

impl LinkState {
    /// Published modules linked by URL, in classpath order.
    #[must_use]
    pub fn link_set(&self) -> &[DependencyIdentity] {
        &self.link_set
    }

    #[must_use]
    pub fn project_links(&self) -> &ProjectLinksConfiguration {
        &self.project_links
    }

    /// Recomputes the state from `configuration` and the resolved `compile_classpath`.
    ///
    /// The new state is computed in full before it replaces the old one; on error
    /// the previous state is kept.
    ///
    /// # Errors
    ///
    /// - [`LinksError::ConfigurationNotFound`] if either configuration is missing
    /// - [`LinksError::UnresolvedDependency`] for the first unresolved direct
    ///   child of the compile classpath
    pub fn rebuild<R>(
        &mut self,
        resolver: &R,
        configuration: &str,
        compile_classpath: &str,
    ) -> Result<(), LinksError>
    where
        R: DependencyResolver + ?Sized,
    {
        *self = Self::compute(resolver, configuration, compile_classpath)?;
        Ok(())
    }

    fn compute<R>(
        resolver: &R,
        configuration: &str,
        compile_classpath: &str,
    ) -> Result<Self, LinksError>
    where
        R: DependencyResolver + ?Sized,
    {
        let declared: HashSet<ModuleKey> =
            resolver.declared_dependencies(configuration)?.into_iter().collect();

        let mut state = Self::default();
        for result in resolver.resolved_root(compile_classpath)? {
            let dependency = match result {
                DependencyResult::Resolved(dependency) => dependency,
                DependencyResult::Unresolved(unresolved) => {
                    return Err(LinksError::UnresolvedDependency {
                        dependency: unresolved.requested,
                        reason: unresolved.reason,
                    });
                }
            };

            if !declared.contains(&dependency.identity.module_key()) {
                debug!("Skipping {} (not declared on {configuration})", dependency.identity);
                continue;
            }

            match dependency.component {
                ComponentKind::ExternalModule => {
                    debug!("Linking {}", dependency.identity);
                    state.link_set.push(dependency.identity);
                }
                ComponentKind::SameBuildProject { path } => {
                    debug!("Linking project {path} through its javadoc artifact");
                    state.project_links.add(DocumentationDependency::Project { path });
                }
                ComponentKind::CrossBuildProject { build, path } => {
                    let key = dependency.identity.module_key();
                    debug!("Linking {key} (project {path} of build {build}) through its javadoc artifact");
                    state.project_links.add(DocumentationDependency::Module(key));
                }
            }
        }

        Ok(state)
    }
}
