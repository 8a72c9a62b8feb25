//! Grouping of sibling directories by structural signature

use crate::tree::hasher;
use crate::tree::node::DirectoryNode;
use crate::types::Signature;
use std::collections::HashMap;

/// Siblings sharing one signature, in their original sibling order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirGroup<'a> {
    pub signature: Signature,
    pub members: Vec<&'a DirectoryNode>,
}

impl<'a> DirGroup<'a> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Partition siblings into groups of identical structure.
///
/// Groups appear in the order their signature is first seen. The partition is
/// always complete; limiting how many members are shown is up to the caller.
pub fn group_identical(dirs: &[DirectoryNode]) -> Vec<DirGroup<'_>> {
    let mut index: HashMap<Signature, usize> = HashMap::new();
    let mut groups: Vec<DirGroup<'_>> = Vec::new();

    for dir in dirs {
        let signature = match &dir.signature {
            Some(signature) => signature.clone(),
            None => hasher::compute_fallback_signature(&dir.name, dir.depth),
        };

        match index.get(&signature) {
            Some(&slot) => groups[slot].members.push(dir),
            None => {
                index.insert(signature.clone(), groups.len());
                groups.push(DirGroup {
                    signature,
                    members: vec![dir],
                });
            }
        }
    }

    groups
}
