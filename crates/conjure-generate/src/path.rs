use std::any::TypeId;

/// Composite types under construction along the active call chain.
///
/// Frames live on the call stack and point at their parent, so a type is on
/// the path only while its own parameters are being resolved. Siblings and
/// diamond-shaped graphs never see each other's frames.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Path<'p> {
    Root,
    Frame {
        type_id: TypeId,
        type_name: &'static str,
        parent: &'p Path<'p>,
    },
}

impl<'p> Path<'p> {
    pub(crate) fn contains(&self, type_id: TypeId) -> bool {
        self.frames().any(|(id, _)| id == type_id)
    }

    pub(crate) fn depth(&self) -> usize {
        self.frames().count()
    }

    /// Type names from the outermost composite to the innermost.
    pub(crate) fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.frames().map(|(_, name)| name).collect();
        names.reverse();
        names
    }

    fn frames(&self) -> impl Iterator<Item = (TypeId, &'static str)> + '_ {
        let mut current: &Path<'_> = self;
        std::iter::from_fn(move || match current {
            Path::Root => None,
            Path::Frame {
                type_id,
                type_name,
                parent,
            } => {
                let frame = (*type_id, *type_name);
                current = *parent;
                Some(frame)
            }
        })
    }
}
