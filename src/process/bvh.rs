use std::cmp::Ordering;

use crate::primitives::aabb::AABB;
use crate::primitives::hit::Hit;
use crate::primitives::ray::Ray;
use crate::primitives::tri_mesh::TriMesh;
use crate::process::intersect::{hit_triangle, Intersector};

const TIE_SLACK: f32 = 1e-5;
/// Relative growth of every triangle box, so rays that graze an edge or
/// vertex are not culled by the slab test when the triangle test accepts them.
const BOX_PADDING: f32 = 1e-3;

/// Triangle reference used while building.
#[derive(Debug, Copy, Clone)]
struct Primitive {
    triangle: usize,
    aabb: AABB,
    centroid: [f32; 3],
}

impl Primitive {
    fn collect(mesh: &TriMesh) -> Vec<Primitive> {
        mesh.triangles
            .iter()
            .enumerate()
            .filter_map(|(triangle, tri)| {
                let bounds = tri.bounding_box(&mesh.vertices)?;
                Some(Primitive {
                    triangle,
                    aabb: bounds.padded(BOX_PADDING),
                    centroid: bounds.centroid(),
                })
            })
            .collect()
    }
}

/// Flat node. Leaves carry a triangle index, branches carry two child indices;
/// unused links are `-1`.
#[derive(Debug, Copy, Clone)]
pub struct BVHNode {
    aabb: AABB,
    left: i32,
    right: i32,
    triangle: i32,
}

impl BVHNode {
    fn new(nodes: &mut Vec<BVHNode>, primitives: &mut [Primitive], start: usize, end: usize) -> i32 {
        debug_assert!(start < end, "BVHNode::new called with invalid range");

        let object_span = end - start;
        let mut left = -1;
        let mut right = -1;
        let mut triangle = -1;
        let aabb;

        if object_span == 1 {
            aabb = primitives[start].aabb;
            triangle = primitives[start].triangle as i32;
        } else {
            let axis = choose_axis(primitives, start, end);
            primitives[start..end].sort_by(|a, b| box_compare(a, b, axis));
            let mid = start + object_span / 2;
            left = BVHNode::new(nodes, primitives, start, mid);
            right = BVHNode::new(nodes, primitives, mid, end);
            aabb = nodes[left as usize].aabb.union(&nodes[right as usize].aabb);
        }

        nodes.push(BVHNode {
            aabb,
            left,
            right,
            triangle,
        });

        (nodes.len() - 1) as i32
    }

    pub fn aabb(&self) -> &AABB {
        &self.aabb
    }

    pub fn is_leaf(&self) -> bool {
        self.triangle >= 0
    }
}

/// Bounding volume hierarchy over the triangles of one mesh.
///
/// Only valid for the mesh it was built from.
#[derive(Debug, Clone)]
pub struct BVH {
    root: i32,
    nodes: Vec<BVHNode>,
}

impl BVH {
    pub fn new(mesh: &TriMesh) -> BVH {
        let mut primitives = Primitive::collect(mesh);
        if primitives.is_empty() {
            return BVH {
                root: -1,
                nodes: Vec::new(),
            };
        }

        let mut nodes = Vec::with_capacity(2 * primitives.len() - 1);
        let len = primitives.len();
        let root = BVHNode::new(&mut nodes, &mut primitives, 0, len);
        let mut bvh = BVH { root, nodes };
        bvh.reorder_nodes();

        log::debug!("Built BVH with {} nodes over {} triangles", bvh.nodes.len(), len);
        bvh
    }

    pub fn nodes(&self) -> &[BVHNode] {
        &self.nodes
    }

    pub fn root(&self) -> i32 {
        self.root
    }

    /// Lays nodes out depth-first so the root sits at index 0 and each left
    /// child directly follows its parent.
    pub fn reorder_nodes(&mut self) {
        let mut ordered_nodes = Vec::with_capacity(self.nodes.len());
        let new_root = self.reorder_nodes_recursive(self.root, &mut ordered_nodes);
        self.root = new_root;
        self.nodes = ordered_nodes;
    }

    fn reorder_nodes_recursive(&self, node_index: i32, ordered_nodes: &mut Vec<BVHNode>) -> i32 {
        if node_index == -1 {
            return -1;
        }

        let node = self.nodes[node_index as usize];
        let new_index = ordered_nodes.len();
        ordered_nodes.push(node);

        let new_left = self.reorder_nodes_recursive(node.left, ordered_nodes);
        let new_right = self.reorder_nodes_recursive(node.right, ordered_nodes);

        ordered_nodes[new_index].left = new_left;
        ordered_nodes[new_index].right = new_right;

        new_index as i32
    }
}

impl Intersector for BVH {
    fn name(&self) -> &'static str {
        "bvh"
    }

    fn intersect(&self, ray: &Ray, mesh: &TriMesh) -> Option<Hit> {
        if self.root < 0 {
            return None;
        }

        let mut closest: Option<Hit> = None;
        let mut stack = vec![self.root];

        while let Some(index) = stack.pop() {
            let node = &self.nodes[index as usize];
            // Slack keeps equal-t candidates reachable for the index tie-break.
            let t_max = closest.map_or(ray.t_far, |hit| hit.t + TIE_SLACK * hit.t.abs().max(1.0));
            if ray.intersect_aabb(&node.aabb, t_max).is_none() {
                continue;
            }

            if node.is_leaf() {
                if let Some(hit) = hit_triangle(ray, mesh, node.triangle as usize) {
                    closest = Some(hit.nearest(closest));
                }
                continue;
            }

            let left_t = ray.intersect_aabb(&self.nodes[node.left as usize].aabb, t_max);
            let right_t = ray.intersect_aabb(&self.nodes[node.right as usize].aabb, t_max);

            // Nearer child goes on top of the stack.
            match (left_t, right_t) {
                (Some(lt), Some(rt)) => {
                    if lt <= rt {
                        stack.push(node.right);
                        stack.push(node.left);
                    } else {
                        stack.push(node.left);
                        stack.push(node.right);
                    }
                }
                (Some(_), None) => stack.push(node.left),
                (None, Some(_)) => stack.push(node.right),
                (None, None) => {}
            }
        }

        closest
    }
}

fn box_compare(a: &Primitive, b: &Primitive, axis: usize) -> Ordering {
    a.aabb.min[axis].partial_cmp(&b.aabb.min[axis]).unwrap_or(Ordering::Equal)
}

/// Axis along which triangle centroids are most spread out.
fn choose_axis(primitives: &[Primitive], start: usize, end: usize) -> usize {
    let mut centroid_sums = [0.0f32; 3];
    let mut centroid_sums_squared = [0.0f32; 3];

    for primitive in &primitives[start..end] {
        for axis in 0..3 {
            centroid_sums[axis] += primitive.centroid[axis];
            centroid_sums_squared[axis] += primitive.centroid[axis].powi(2);
        }
    }

    let num_primitives = (end - start) as f32;
    let mut max_variance = 0.0;
    let mut max_variance_axis = 0;

    for axis in 0..3 {
        let mean = centroid_sums[axis] / num_primitives;
        let variance = centroid_sums_squared[axis] / num_primitives - mean.powi(2);

        if variance > max_variance {
            max_variance = variance;
            max_variance_axis = axis;
        }
    }

    max_variance_axis
}
