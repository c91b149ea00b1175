pub(crate) mod plagiarism;
