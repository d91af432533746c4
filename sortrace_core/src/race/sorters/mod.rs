pub mod binary_insertion_sorter;
pub mod bubble_sorter;
pub mod shell_sorter;
pub mod std_sorter;
