//! 评论串
//!
//! 按 ID 解析回复链。回复只能指向已存在于本串中的评论，因此链不会成环也不会悬空。

use std::collections::HashMap;

use remark_common::CommentId;

use super::comment::Comment;
use crate::domain::actor::Actor;
use crate::error::DiscussionError;

#[derive(Debug, Default)]
pub struct CommentThread {
    comments: HashMap<CommentId, Comment>,
}

impl CommentThread {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入一条已构造的评论，被回复的评论必须已在串中
    pub fn insert(&mut self, comment: Comment) -> Result<CommentId, DiscussionError> {
        if let Some(parent) = comment.replied_to() {
            if !self.comments.contains_key(&parent) {
                return Err(DiscussionError::CommentNotFound(parent));
            }
        }
        let id = comment.id();
        self.comments.insert(id, comment);
        Ok(id)
    }

    /// 发表新评论
    pub fn post(&mut self, author: &Actor, message: impl Into<String>) -> CommentId {
        let comment = Comment::new(author, message, None);
        let id = comment.id();
        self.comments.insert(id, comment);
        id
    }

    /// 回复已有评论
    pub fn reply(
        &mut self,
        author: &Actor,
        parent: CommentId,
        message: impl Into<String>,
    ) -> Result<CommentId, DiscussionError> {
        let parent = self
            .comments
            .get(&parent)
            .ok_or(DiscussionError::CommentNotFound(parent))?;
        let comment = Comment::new(author, message, Some(parent));
        let id = comment.id();
        self.comments.insert(id, comment);
        Ok(id)
    }

    pub fn get(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.get(id)
    }

    pub fn get_mut(&mut self, id: &CommentId) -> Option<&mut Comment> {
        self.comments.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// 从被回复的评论开始，沿回复链走向根评论
    pub fn ancestors(&self, id: &CommentId) -> Ancestors<'_> {
        Ancestors {
            thread: self,
            next: self.get(id).and_then(Comment::replied_to),
        }
    }

    /// 回复链的根评论
    pub fn root_of(&self, id: &CommentId) -> Option<&Comment> {
        let comment = self.get(id)?;
        Some(self.ancestors(id).last().unwrap_or(comment))
    }
}

/// 回复链迭代器
#[derive(Debug)]
pub struct Ancestors<'a> {
    thread: &'a CommentThread,
    next: Option<CommentId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Comment;

    fn next(&mut self) -> Option<Self::Item> {
        let comment = self.thread.get(&self.next.take()?)?;
        self.next = comment.replied_to();
        Some(comment)
    }
}
