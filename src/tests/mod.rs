mod common;

mod group_membership;
