//! Defines the Denavit-Hartenberg parameter data structures

pub mod dh_kinematics {
    use crate::utils::deg;

    /// DH parameters of a single link of the kinematic chain.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct DhLink {
        /// Link length: distance between the joint axes along the common normal.
        pub a: f64,

        /// Link twist in radians: angle between the joint axes about the common normal.
        pub alpha: f64,

        /// Link offset: displacement along the previous joint axis.
        pub d: f64,

        /// Joint angle offset in radians, added to the actuation angle of this
        /// joint to form the total joint angle.
        pub theta_offset: f64,
    }

    impl DhLink {
        pub fn new(a: f64, alpha: f64, d: f64, theta_offset: f64) -> Self {
            DhLink { a, alpha, d, theta_offset }
        }
    }

    /// Ordered DH parameter table of a serial manipulator, one row per joint.
    /// Fixed at construction time; analysis never mutates it.
    /// See [parameters_robots.rs](parameters_robots.rs) for concrete arms.
    #[derive(Debug, Clone, PartialEq)]
    pub struct DhTable {
        links: Vec<DhLink>,
    }

    impl DhTable {
        pub fn new(links: Vec<DhLink>) -> Self {
            DhTable { links }
        }

        /// Builds the table from `[a, alpha, d, theta_offset]` rows.
        pub fn from_rows(rows: &[[f64; 4]]) -> Self {
            DhTable {
                links: rows
                    .iter()
                    .map(|row| DhLink::new(row[0], row[1], row[2], row[3]))
                    .collect(),
            }
        }

        /// Degrees of freedom: the number of joints in the table.
        pub fn dof(&self) -> usize {
            self.links.len()
        }

        pub fn links(&self) -> &[DhLink] {
            &self.links
        }

        /// Sum of the link lengths (the `a` column), the fully stretched
        /// extent of the arm along the common normals.
        pub fn total_length(&self) -> f64 {
            self.links.iter().map(|link| link.a).sum()
        }

        /// Sum of the link offsets (the `d` column).
        pub fn total_offset(&self) -> f64 {
            self.links.iter().map(|link| link.d).sum()
        }

        /// Convert to a string table representation (quick viewing, etc).
        pub fn to_table(&self) -> String {
            let mut out = String::from("Joint |    a    |   alpha    |    d    | theta_offset\n");
            for (i, link) in self.links.iter().enumerate() {
                out.push_str(&format!(
                    "  {}   | {:7.2} | {:>10} | {:7.2} | {:>10}\n",
                    i + 1,
                    link.a,
                    deg(&link.alpha),
                    link.d,
                    deg(&link.theta_offset)
                ));
            }
            out
        }
    }
}
