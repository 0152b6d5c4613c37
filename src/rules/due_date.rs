use crate::error::Result;
use crate::rules::rewriter::RewriteRule;

/// Matches the filtered fetch idiom in `getInstancesForTemplate`: a
/// templateId-filtered query ordered by dueDate, awaited, then mapped
/// straight into a list.
const FILTERED_QUERY_PATTERN: &str = concat!(
	r"\.where\('templateId', isEqualTo: templateId\)\s*",
	r"\.orderBy\('dueDate', descending: false\);\s*",
	r"final result = await query\.get\(\);\s*",
	r"return result\.docs\s*",
	r"\.map\(\(doc\) => ActivityInstanceRecord\.fromSnapshot\((doc)\)\)\s*",
	r"\.toList\(\);"
);

/// Same idiom without the where clause, as in `getAllInstances`.
const UNFILTERED_QUERY_PATTERN: &str = concat!(
	r"\.orderBy\('dueDate', descending: false\);\s*",
	r"final result = await query\.get\(\);\s*",
	r"return result\.docs\s*",
	r"\.map\(\(doc\) => ActivityInstanceRecord\.fromSnapshot\((doc)\)\)\s*",
	r"\.toList\(\);"
);

/// Drops the orderBy clause and sorts the fetched list in memory instead,
/// with null due dates sorting before any dated instance. Firestore's
/// orderBy silently drops documents where the field is missing; the
/// in-memory sort keeps them.
const FILTERED_QUERY_REWRITE: &str = r".where('templateId', isEqualTo: templateId);
      final result = await query.get();
      final instances = result.docs
          .map((doc) => ActivityInstanceRecord.fromSnapshot(doc))
          .toList();
      instances.sort((a, b) {
        if (a.dueDate == null && b.dueDate == null) return 0;
        if (a.dueDate == null) return -1;
        if (b.dueDate == null) return 1;
        return a.dueDate!.compareTo(b.dueDate!);
      });
      return instances;";

const UNFILTERED_QUERY_REWRITE: &str = r";
      final result = await query.get();
      final instances = result.docs
          .map((doc) => ActivityInstanceRecord.fromSnapshot(doc))
          .toList();
      instances.sort((a, b) {
        if (a.dueDate == null && b.dueDate == null) return 0;
        if (a.dueDate == null) return -1;
        if (b.dueDate == null) return 1;
        return a.dueDate!.compareTo(b.dueDate!);
      });
      return instances;";

/// Compile the two rewrite rules, in application order.
///
/// Order matters: the filtered pattern ends with the unfiltered one, so the
/// filtered sites must be rewritten before the narrower rule runs.
pub fn due_date_rules() -> Result<Vec<RewriteRule>> {
	Ok(vec![
		RewriteRule::new(FILTERED_QUERY_PATTERN, FILTERED_QUERY_REWRITE)?,
		RewriteRule::new(UNFILTERED_QUERY_PATTERN, UNFILTERED_QUERY_REWRITE)?,
	])
}
